use crate::{constants::*, utils::*};
use anyhow::Error;
use sequitur_tableau::trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE};
use std::fs;
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "check", about = "Decide whether the input argument is valid")]
    Check {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input argument file"
        )]
        input: Option<std::path::PathBuf>,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &crate::terminal::Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Check { input } => {
                let argument = if let Some(input) = input {
                    read_argument_from_file(input.to_str().unwrap_or("."))?
                } else {
                    read_argument_from_stdin()?
                };

                stylus.set(&info_style());
                println!("Checking argument:");

                stylus.set(&argument_style());
                println!("{}", argument);
                println!();

                if argument.is_valid() {
                    stylus.set(&valid_style());
                    println!("Valid.");
                } else {
                    stylus.set(&invalid_style());
                    println!("Invalid.");
                }
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "Sequitur",
    about = "A decision procedure for propositional arguments"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(subcommand, name = "command")]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<std::path::PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self
            .log
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !self.no_color {
            stylus.set(&logo_style());
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let log = fs::File::create(log).expect("cannot create the log file");
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
