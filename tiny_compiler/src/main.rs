use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tiny_compiler::config::compile_time::driver::DEFAULT_C_COMPILER;
use tiny_compiler::config::compile_time::emit::DEFAULT_OUTPUT_PATH;
use tiny_compiler::config::runtime::LoggingPreferences;
use tiny_compiler::{log_info, log_success, log_warning, logging, pipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.tiny> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_driver_options(&args[2..]);

    // Initialize global logging system
    let preferences = if options.quiet {
        LoggingPreferences::quiet()
    } else {
        LoggingPreferences::default()
    };
    logging::init_global_logging(&preferences)?;

    let input_path = Path::new(&args[1]);
    if compile_and_run_toolchain(input_path, &options).is_err() {
        std::process::exit(1);
    }

    Ok(())
}

/// Driver options parsed from the command line
#[derive(Debug, Clone)]
struct DriverOptions {
    output_path: PathBuf,
    c_compiler: String,
    compile_output: bool,
    quiet: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            c_compiler: DEFAULT_C_COMPILER.to_string(),
            compile_output: true,
            quiet: false,
        }
    }
}

fn print_help(program_name: &str) {
    println!("Tiny compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Single-pass Tiny BASIC to C transpiler");
    println!();
    println!("USAGE:");
    println!("    {} <input.tiny> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input.tiny>   Path to the Tiny source file");
    println!();
    println!("OPTIONS:");
    println!("    --help           Show this help message");
    println!(
        "    --out PATH       Write the emitted C to PATH (default: {})",
        DEFAULT_OUTPUT_PATH
    );
    println!(
        "    --cc COMPILER    C compiler to invoke on the output (default: {})",
        DEFAULT_C_COMPILER
    );
    println!("    --no-compile     Emit C only, skip the toolchain step");
    println!("    --quiet          Only report errors");
}

fn parse_driver_options(args: &[String]) -> DriverOptions {
    let mut options = DriverOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                if i + 1 < args.len() {
                    options.output_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                } else {
                    eprintln!("Warning: --out requires a path");
                }
            }
            "--cc" => {
                if i + 1 < args.len() {
                    options.c_compiler = args[i + 1].clone();
                    i += 1;
                } else {
                    eprintln!("Warning: --cc requires a compiler name");
                }
            }
            "--no-compile" => {
                options.compile_output = false;
            }
            "--quiet" => {
                options.quiet = true;
            }
            _ => {
                eprintln!("Warning: Unknown option '{}'", args[i]);
            }
        }
        i += 1;
    }

    options
}

fn compile_and_run_toolchain(input_path: &Path, options: &DriverOptions) -> Result<(), ()> {
    match pipeline::compile_file(input_path, &options.output_path) {
        Ok(result) => {
            log_info!("Wrote translation",
                "input" => input_path.display(),
                "output" => result.output_path.display(),
                "variables" => result.variable_count,
                "labels" => result.label_count
            );
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            return Err(());
        }
    }

    if options.compile_output {
        run_toolchain(&options.c_compiler, &options.output_path);
    }

    println!("Compilation {} finished", input_path.display());
    Ok(())
}

/// Invoke the system C compiler on the emitted file. The exit status is
/// reported but does not fail the driver.
fn run_toolchain(c_compiler: &str, output_path: &Path) {
    match Command::new(c_compiler).arg(output_path).status() {
        Ok(status) => {
            log_success!(
                tiny_compiler::logging::codes::success::TOOLCHAIN_INVOKED,
                "Toolchain invoked",
                "compiler" => c_compiler,
                "status" => status
            );
        }
        Err(error) => {
            log_warning!("Could not invoke C compiler",
                "compiler" => c_compiler,
                "reason" => error
            );
        }
    }
}

fn print_detailed_error(error: &pipeline::PipelineError) {
    match error {
        pipeline::PipelineError::FileProcessing(file_err) => {
            eprintln!("File processing stage failed:");
            eprintln!("  {}", file_err);
        }
        pipeline::PipelineError::LexicalAnalysis(lex_err) => {
            eprintln!("Lexical analysis stage failed:");
            eprintln!("  [{}] {}", lex_err.error_code(), lex_err);
        }
        pipeline::PipelineError::SyntaxAnalysis(syntax_err) => {
            eprintln!("Syntax analysis stage failed:");
            eprintln!("  [{}] {}", syntax_err.error_code(), syntax_err);
        }
        pipeline::PipelineError::Emit(emit_err) => {
            eprintln!("Output emission stage failed:");
            eprintln!("  {}", emit_err);
        }
        pipeline::PipelineError::Pipeline { message } => {
            eprintln!("Pipeline error: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_driver_options() {
        let args = vec![
            "--out".to_string(),
            "build/prog.c".to_string(),
            "--no-compile".to_string(),
            "--quiet".to_string(),
        ];

        let options = parse_driver_options(&args);
        assert_eq!(options.output_path, PathBuf::from("build/prog.c"));
        assert!(!options.compile_output);
        assert!(options.quiet);
    }

    #[test]
    fn test_parse_driver_options_defaults() {
        let options = parse_driver_options(&[]);
        assert_eq!(options.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(options.c_compiler, DEFAULT_C_COMPILER);
        assert!(options.compile_output);
        assert!(!options.quiet);
    }

    #[test]
    fn test_parse_driver_options_missing_value() {
        let args = vec!["--out".to_string()];
        let options = parse_driver_options(&args);
        // Missing path leaves the default in place
        assert_eq!(options.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }
}
