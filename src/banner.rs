use crate::consts::REPO;

/// Session info displayed in the startup banner.
pub struct BannerInfo<'a> {
    pub endpoint: &'a str,
    pub store: &'a str,
    pub history: usize,
}

pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║          🔮  B O L A  🔮              ║
   ║         ¡Haz tu pregunta!             ║
   ╚═══════════════════════════════════════╝

   version   {}
   repo      {}
   oracle    {}
   store     {}
   history   {} entries

   Termina con ? o ¿ ?   ·   /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        REPO,
        info.endpoint,
        info.store,
        info.history,
    );
}

/// Print the farewell, with a tally when anything was asked.
pub fn print_session_summary(asked: usize) {
    match asked {
        0 => {}
        1 => println!("session: 1 question"),
        n => println!("session: {n} questions"),
    }
    println!("¡adiós!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_banner_does_not_panic() {
        print_banner(&BannerInfo {
            endpoint: "https://yesno.wtf/api",
            store: "ephemeral",
            history: 3,
        });
    }

    #[test]
    fn print_session_summary_does_not_panic() {
        print_session_summary(0);
        print_session_summary(1);
        print_session_summary(12);
    }
}
