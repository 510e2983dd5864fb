use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::presenter::browser::BrowserLauncher;
use crate::presenter::console_style::ConsoleStyle;
use crate::presenter::error_reporter::report_error;
use crate::presenter::render_table::{render_table, TableLayout};
use crate::presenter::selection::parse_selection;
use crate::scraping::ranked_item::{RankedItem, TopSellers};

/// How the prompt loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Opened(RankedItem),
    /// The item was chosen but the OS refused to launch the browser.
    LaunchFailed(RankedItem),
    /// Input reached end of file before a valid choice.
    InputClosed,
}

enum PromptState {
    Prompting,
    Done(PromptOutcome),
}

/// Renders the table and asks for a position until a valid one is entered.
pub struct Presenter<'a, S: ?Sized, B: ?Sized> {
    pub heading: String,
    pub layout: TableLayout,
    pub style: &'a S,
    pub browser: &'a B,
}

impl<'a, S, B> Presenter<'a, S, B>
where
    S: ConsoleStyle + ?Sized,
    B: BrowserLauncher + ?Sized,
{
    pub fn run<R, W>(&self, list: &TopSellers, input: &mut R, out: &mut W) -> io::Result<PromptOutcome>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let max = list.effective_count();
        let mut state = PromptState::Prompting;

        loop {
            match state {
                PromptState::Prompting => {
                    writeln!(out, "{}", self.heading)?;
                    render_table(out, list.items(), &self.layout)?;
                    writeln!(out, "Enter a position to open its store page in the browser:")?;
                    write!(out, "Position - ")?;
                    out.flush()?;

                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        warn!("input closed before a selection was made");
                        state = PromptState::Done(PromptOutcome::InputClosed);
                        continue;
                    }

                    state = match parse_selection(&line, max).map(|position| list.get(position)) {
                        Ok(Some(item)) => PromptState::Done(self.open(item, out)?),
                        rejected => {
                            if let Err(e) = rejected {
                                debug!(error = %e, "selection rejected");
                            }
                            self.reject(max, out)?;
                            PromptState::Prompting
                        }
                    };
                }
                PromptState::Done(outcome) => return Ok(outcome),
            }
        }
    }

    fn open<W: Write + ?Sized>(&self, item: &RankedItem, out: &mut W) -> io::Result<PromptOutcome> {
        info!(rank = item.rank(), url = item.url(), "opening selection");
        let launched = self.browser.open(item.url());

        write!(out, "{}", self.style.clear_screen())?;
        match launched {
            Ok(()) => {
                let message = format!("Opened the store page of {}.", item.name());
                writeln!(out, "{}", self.style.notice(&message))?;
                out.flush()?;
                Ok(PromptOutcome::Opened(item.clone()))
            }
            Err(e) => {
                warn!(error = %e, "browser launch failed");
                report_error(out, self.style, "Failed to open the browser: ", Some(e.to_string().as_str()))?;
                Ok(PromptOutcome::LaunchFailed(item.clone()))
            }
        }
    }

    fn reject<W: Write + ?Sized>(&self, max: usize, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.style.clear_screen())?;
        let message = format!("Invalid input: enter an integer [1 - {}].", max);
        report_error(out, self.style, &message, None)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;

    use super::*;
    use crate::presenter::console_style::PlainStyle;

    #[derive(Default)]
    struct RecordingBrowser {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl BrowserLauncher for RecordingBrowser {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "xdg-open not found"));
            }
            Ok(())
        }
    }

    fn list(count: usize, requested: usize) -> TopSellers {
        let items = (1..=count)
            .map(|n| {
                RankedItem::new(n, format!("Game {}", n), "Free", format!("https://x/app/{}/", n)).unwrap()
            })
            .collect();
        TopSellers::new(items, requested)
    }

    fn run(list: &TopSellers, input: &str, browser: &RecordingBrowser) -> (PromptOutcome, String) {
        let presenter = Presenter {
            heading: "Top sellers".to_string(),
            layout: TableLayout::default(),
            style: &PlainStyle,
            browser,
        };
        let mut out = Vec::new();
        let outcome = presenter.run(list, &mut Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_choice_opens_exactly_that_item() {
        let browser = RecordingBrowser::default();
        let list = list(10, 10);

        let (outcome, out) = run(&list, "3\n", &browser);

        assert_eq!(*browser.opened.borrow(), vec!["https://x/app/3/".to_string()]);
        assert_eq!(outcome, PromptOutcome::Opened(list.get(3).unwrap().clone()));
        assert!(out.ends_with("Opened the store page of Game 3.\n"));
    }

    #[test]
    fn invalid_inputs_reprompt_with_the_same_table() {
        let browser = RecordingBrowser::default();
        let list = list(10, 10);

        let (outcome, out) = run(&list, "0\n-1\nabc\n11\n\n7\n", &browser);

        assert_eq!(out.matches("Invalid input: enter an integer [1 - 10].").count(), 5);
        assert_eq!(out.matches("Top sellers").count(), 6);
        assert_eq!(out.matches("10. Game 10").count(), 6);
        assert_eq!(*browser.opened.borrow(), vec!["https://x/app/7/".to_string()]);
        assert!(matches!(outcome, PromptOutcome::Opened(ref item) if item.rank() == 7));
    }

    #[test]
    fn reduced_list_bounds_the_selection() {
        let browser = RecordingBrowser::default();
        let list = list(4, 10);

        let (_, out) = run(&list, "5\n4\n", &browser);

        assert!(out.contains("Invalid input: enter an integer [1 - 4]."));
        assert_eq!(*browser.opened.borrow(), vec!["https://x/app/4/".to_string()]);
    }

    #[test]
    fn closed_input_ends_without_opening() {
        let browser = RecordingBrowser::default();

        let (outcome, _) = run(&list(3, 3), "", &browser);

        assert_eq!(outcome, PromptOutcome::InputClosed);
        assert!(browser.opened.borrow().is_empty());
    }

    #[test]
    fn failed_launch_is_reported() {
        let browser = RecordingBrowser {
            fail: true,
            ..RecordingBrowser::default()
        };

        let (outcome, out) = run(&list(3, 3), "2\n", &browser);

        assert!(matches!(outcome, PromptOutcome::LaunchFailed(ref item) if item.rank() == 2));
        assert!(out.contains("Failed to open the browser: xdg-open not found"));
        assert!(!out.contains("Opened the store page"));
    }
}
