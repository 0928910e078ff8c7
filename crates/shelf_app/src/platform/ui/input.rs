use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use shelf_core::Msg;
use shelf_logging::shelf_debug;

/// Maps one line of keyboard input to a navigation message.
pub fn parse_command(line: &str) -> Option<Msg> {
    match line.trim().to_ascii_lowercase().as_str() {
        "n" | "next" | ">" => Some(Msg::NextPageClicked),
        "p" | "prev" | "<" => Some(Msg::PrevPageClicked),
        "q" | "quit" | "exit" => Some(Msg::Unmounted),
        _ => None,
    }
}

/// Reads stdin on its own thread; end of input unmounts the widget.
pub fn spawn_reader(tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match parse_command(&line) {
                Some(msg) => {
                    if tx.send(msg).is_err() {
                        return;
                    }
                }
                None => shelf_debug!("Ignoring input {:?}", line),
            }
        }
        let _ = tx.send(Msg::Unmounted);
    });
}
