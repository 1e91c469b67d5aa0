//! Panic handler module
//!
//! A panic inside the UI loop would otherwise leave the terminal in raw
//! mode on the alternate screen. The hook restores it, logs the panic and
//! prints a short message.

/// Install the panic hook for TUI mode
#[cfg(feature = "tui")]
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        restore_terminal();

        let message = panic_message(panic_info.payload());
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        tracing::error!("Panic at {}: {}", location, message);
        eprintln!("linkform crashed: {}", message);
        eprintln!("Location: {}", location);
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use crossterm::{
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
}

#[cfg_attr(not(feature = "tui"), allow(dead_code))]
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_from_payloads() {
        let s: Box<dyn std::any::Any + Send> = Box::new("static message");
        assert_eq!(panic_message(s.as_ref()), "static message");

        let s: Box<dyn std::any::Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(s.as_ref()), "owned message");

        let s: Box<dyn std::any::Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(s.as_ref()), "Unknown panic");
    }
}
