use std::io::Write as _;

use order_dashboard::config::DashboardConfig;
use order_dashboard::console::{self, Command, Flow};
use order_dashboard::dashboard::Dashboard;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let mut dash = match Dashboard::from_config(&config) {
        Ok(dash) => dash,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP clients");
            std::process::exit(1);
        }
    };

    tracing::info!(
        orders_url = %config.orders_url,
        assistant_url = %config.assistant_url,
        poll_interval = ?config.poll_interval,
        "order dashboard starting"
    );

    dash.mount();
    draw(&dash, Some(console::GREETING));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            alive = dash.step() => {
                if !alive {
                    break;
                }
                draw(&dash, None);
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "stdin read failed");
                        break;
                    }
                };
                let note = match Command::parse(&line) {
                    Ok(None) => None,
                    Ok(Some(cmd)) => match console::apply(&mut dash, cmd) {
                        Flow::Continue => None,
                        Flow::Notice(note) => Some(note),
                        Flow::Quit => break,
                    },
                    Err(e) => Some(e.to_string()),
                };
                draw(&dash, note.as_deref());
            }
        }
    }

    dash.unmount();
    tracing::info!("order dashboard stopped");
}

fn draw(dash: &Dashboard, note: Option<&str>) {
    let mut out = std::io::stdout().lock();
    // Clear screen and home the cursor.
    let _ = write!(out, "\x1b[2J\x1b[H{}", dash.render());
    if let Some(note) = note {
        let _ = write!(out, "\n\n{note}");
    }
    let _ = writeln!(out);
    let _ = out.flush();
}
