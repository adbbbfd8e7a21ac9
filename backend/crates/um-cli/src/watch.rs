//! The `um watch` loop: timer-driven refresh plus one shortcut per stdin line.

use crate::dashboard::HELP;
use crate::{CliClientResult, Control, Dashboard, Shortcut};

use um_view::Notice;

use std::io::Write;
use std::time::Duration;

use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Auto-refresh period
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Drive `dashboard` until `q` or end of input. Single task, so the view
/// needs no locking.
pub async fn run(mut dashboard: Dashboard) -> CliClientResult<()> {
    dashboard.reload().await;
    dashboard.view_mut().push_notice(Notice::info(
        "Auto-refresh enabled: Data will update every 15 minutes",
    ));
    redraw(&mut dashboard)?;

    let mut timer = interval_at(Instant::now() + REFRESH_INTERVAL, REFRESH_INTERVAL);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = timer.tick() => {
                info!("Auto-refreshing data from external API");
                dashboard.refresh().await;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match Shortcut::parse(&line) {
                    Some(shortcut) => {
                        if dashboard.handle(shortcut).await == Control::Quit {
                            break;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => dashboard.view_mut().push_notice(Notice::error(format!(
                        "Unknown command \"{}\". {}",
                        line.trim(),
                        HELP
                    ))),
                }
            }
        }

        redraw(&mut dashboard)?;
    }

    Ok(())
}

fn redraw(dashboard: &mut Dashboard) -> CliClientResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", dashboard.screen())?;
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
