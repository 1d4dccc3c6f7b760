use std::process::ExitCode;

use arrlist::{log::Level, scenarios};

fn main() -> ExitCode {
    arrlist::log::init();
    match scenarios::run() {
        Ok(passed) => {
            let _ = arrlist::log::log(
                module_path!(),
                Level::Always,
                format_args!("{} scenarios passed", passed),
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            arrlist::log::error!("{}", err.chain());
            if let Some(loc) = err.location() {
                arrlist::log::error!("  at {}", loc);
            }
            ExitCode::FAILURE
        },
    }
}
