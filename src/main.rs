use argh::{EarlyExit, FromArgs};
use std::io;
use std::path::PathBuf;
use vshell::{Flow, Interpreter, Surface, archive};

const USAGE: &str = "Usage: vshell <path_to_zip> <startup_script>";

fn default_root() -> PathBuf {
    PathBuf::from("file_system")
}

#[derive(FromArgs)]
/// Unpack a zip archive and explore it with ls, cd, pwd, cp and date.
struct Args {
    #[argh(positional)]
    /// zip archive to unpack.
    archive: PathBuf,

    #[argh(positional)]
    /// script to replay at startup, relative to the unpacked directory.
    startup_script: String,

    #[argh(option, short = 'd', default = "default_root()")]
    /// directory to unpack into. Defaults to `file_system`.
    root: PathBuf,
}

fn parse_args() -> Args {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
    match Args::from_args(&["vshell"], &raw) {
        Ok(args) => args,
        Err(EarlyExit { output, status }) => match status {
            Ok(()) => {
                println!("{output}");
                std::process::exit(0)
            }
            Err(()) => {
                eprintln!("{USAGE}");
                eprintln!("{output}");
                std::process::exit(1)
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = parse_args();

    if let Err(e) = archive::extract(&args.archive, &args.root) {
        println!("{e}");
    }

    let mut surface = Surface::new(Interpreter::new(&args.root));
    let script = args.root.join(&args.startup_script);
    if surface.run_startup_script(&script, &mut io::stdout())? == Flow::Exit {
        return Ok(());
    }

    surface.repl()?;
    Ok(())
}
