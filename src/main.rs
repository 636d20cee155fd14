//! ditaform - DITA topic converter

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use ditaform::{Conversion, Document, to_concept, to_reference, to_task, to_task_generated};

#[derive(Parser)]
#[command(name = "ditaform")]
#[command(version, about = "Convert DITA topics to concepts, tasks, or references", long_about = None)]
#[command(after_help = "EXAMPLES:
    ditaform -t task topic.dita              Convert a topic to a task
    ditaform -t task -g topic.dita           Convert headings to task sections
    ditaform topic.dita -o concept.dita      Infer the type from outputclass")]
struct Cli {
    /// Input file, or - for standard input
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file, or - for standard output
    #[arg(short, long, value_name = "OUTPUT", default_value = "-")]
    output: String,

    /// Target type; inferred from the topic's outputclass when omitted
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    target: Option<TargetType>,

    /// Convert heading-marked content to task sections
    #[arg(short, long, overrides_with = "no_generated")]
    generated: bool,

    /// Do not treat heading-marked content specially
    #[arg(short = 'G', long, overrides_with = "generated")]
    no_generated: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum TargetType {
    Concept,
    Task,
    Reference,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ditaform: {}: {e}", cli.input);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = read_input(&cli.input).map_err(|e| e.to_string())?;
    let document = Document::parse(&source).map_err(|e| e.to_string())?;

    let target = match cli.target {
        Some(target) => target,
        None => infer_target(&document).map_err(|e| format!("error: {e}"))?,
    };

    let conversion = convert(&document, target, cli.generated).map_err(|e| e.to_string())?;

    for warning in &conversion.warnings {
        eprintln!("{warning}");
    }

    write_output(&cli.output, &conversion.document.to_xml()).map_err(|e| e.to_string())
}

fn convert(
    document: &Document,
    target: TargetType,
    generated: bool,
) -> ditaform::Result<Conversion> {
    match target {
        TargetType::Concept => to_concept(document),
        TargetType::Reference => to_reference(document),
        TargetType::Task if generated => to_task_generated(document),
        TargetType::Task => to_task(document),
    }
}

/// Infer the target type from the topic's outputclass attribute:
/// concept, task or procedure, reference.
fn infer_target(document: &Document) -> Result<TargetType, String> {
    match document.root.attr("outputclass") {
        Some("concept") => Ok(TargetType::Concept),
        Some("task") | Some("procedure") => Ok(TargetType::Task),
        Some("reference") => Ok(TargetType::Reference),
        Some(other) => Err(format!("unsupported outputclass \"{other}\"")),
        None => Err("outputclass not found, use -t/--type".to_string()),
    }
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(ditaform::dom::strip_bom(&bytes)).into_owned())
    }
}

fn write_output(path: &str, xml: &str) -> std::io::Result<()> {
    if path == "-" {
        print!("{xml}");
        Ok(())
    } else {
        std::fs::write(path, xml)
    }
}
