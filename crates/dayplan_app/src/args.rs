use std::collections::BTreeSet;
use std::time::Duration;

use bitflags::bitflags;
use chrono::NaiveDate;
use tracing::error;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlannerOptions: u32 {
        /// Are we on light theme?
        const LightTheme = 1 << 0;

        /// Debug overlay with frame info
        const Debug = 1 << 1;

        /// Phone-sized window
        const Mobile = 1 << 2;

        /// Picking a search result adds it to the day instead of navigating
        const SearchAdds = 1 << 3;
    }
}

impl Default for PlannerOptions {
    fn default() -> Self {
        PlannerOptions::empty()
    }
}

#[derive(Debug, Default)]
pub struct Args {
    pub options: PlannerOptions,
    pub date: Option<NaiveDate>,
    pub itinerary: Option<String>,
    pub chat_delay: Option<Duration>,
    pub email: Option<String>,
    pub datapath: Option<String>,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args::default();

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--mobile" {
                res.options.set(PlannerOptions::Mobile, true);
            } else if arg == "--light" {
                res.options.set(PlannerOptions::LightTheme, true);
            } else if arg == "--dark" {
                res.options.set(PlannerOptions::LightTheme, false);
            } else if arg == "--debug" {
                res.options.set(PlannerOptions::Debug, true);
            } else if arg == "--search-adds" {
                res.options.set(PlannerOptions::SearchAdds, true);
            } else if arg == "--date" {
                i += 1;
                let Some(date) = args.get(i) else {
                    error!("date argument missing?");
                    continue;
                };
                match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                    Ok(date) => res.date = Some(date),
                    Err(err) => error!("failed to parse date '{date}': {err}. Use YYYY-MM-DD."),
                }
            } else if arg == "--itinerary" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("itinerary argument missing?");
                    continue;
                };
                res.itinerary = Some(path.clone());
            } else if arg == "--chat-delay-ms" {
                i += 1;
                let Some(ms) = args.get(i) else {
                    error!("chat-delay-ms argument missing?");
                    continue;
                };
                match ms.parse::<u64>() {
                    Ok(ms) => res.chat_delay = Some(Duration::from_millis(ms)),
                    Err(err) => error!("failed to parse chat delay '{ms}': {err}"),
                }
            } else if arg == "--email" {
                i += 1;
                let Some(email) = args.get(i) else {
                    error!("email argument missing?");
                    continue;
                };
                res.email = Some(email.clone());
            } else if arg == "--datapath" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }

    pub fn is_mobile(&self) -> bool {
        self.options.contains(PlannerOptions::Mobile)
    }

    pub fn is_light(&self) -> bool {
        self.options.contains(PlannerOptions::LightTheme)
    }

    pub fn is_debug(&self) -> bool {
        self.options.contains(PlannerOptions::Debug)
    }

    pub fn search_adds(&self) -> bool {
        self.options.contains(PlannerOptions::SearchAdds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_values() {
        let (parsed, unknown) = Args::parse(&args(&[
            "--mobile",
            "--light",
            "--search-adds",
            "--date",
            "2026-10-17",
            "--itinerary",
            "plan.json",
            "--chat-delay-ms",
            "250",
            "--email",
            "me@example.com",
        ]));

        assert!(unknown.is_empty());
        assert!(parsed.is_mobile());
        assert!(parsed.is_light());
        assert!(parsed.search_adds());
        assert!(!parsed.is_debug());
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2026, 10, 17));
        assert_eq!(parsed.itinerary.as_deref(), Some("plan.json"));
        assert_eq!(parsed.chat_delay, Some(Duration::from_millis(250)));
        assert_eq!(parsed.email.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn dark_overrides_light() {
        let (parsed, _) = Args::parse(&args(&["--light", "--dark"]));
        assert!(!parsed.is_light());
    }

    #[test]
    fn collects_unrecognized() {
        let (parsed, unknown) = Args::parse(&args(&["dayplan", "--debug", "--wat"]));
        assert!(parsed.is_debug());
        assert_eq!(
            unknown.into_iter().collect::<Vec<_>>(),
            vec!["--wat".to_string(), "dayplan".to_string()]
        );
    }

    #[test]
    fn bad_values_are_skipped() {
        let (parsed, unknown) = Args::parse(&args(&[
            "--date",
            "tomorrow",
            "--chat-delay-ms",
            "soon",
            "--datapath",
        ]));
        assert!(unknown.is_empty());
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.chat_delay, None);
        assert_eq!(parsed.datapath, None);
    }
}
