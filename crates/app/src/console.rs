//! Plays the flow in a terminal: prompts on `out`, answers read line by line from `input`.

use std::error::Error;
use std::io::Write;

use quiz_core::{Event, Stage};
use services::FlowController;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Run until the user declines to start over or the input ends.
///
/// # Errors
///
/// Returns I/O errors from either side, and JSON errors while printing the transcript.
pub async fn run<R, W>(
    controller: &mut FlowController,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        match controller.session().stage() {
            Stage::Landing => {
                writeln!(out, "Are you free?")?;
                let Some(line) = prompt(&mut lines, out, "Press Enter when you are (q to quit): ").await?
                else {
                    return Ok(());
                };
                if line.trim().eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                controller.dispatch(Event::Start)?;
            }
            Stage::Auth => {
                writeln!(out, "{}", controller.session().auth_mode().heading())?;
                let Some(username) = prompt(&mut lines, out, "Username: ").await? else {
                    return Ok(());
                };
                let Some(password) = prompt(&mut lines, out, "Password: ").await? else {
                    return Ok(());
                };
                controller.dispatch(Event::EditUsername(username))?;
                controller.dispatch(Event::EditPassword(password))?;
                if let Err(err) = controller.dispatch(Event::SubmitCredentials) {
                    writeln!(out, "{}", err.message())?;
                }
            }
            Stage::Questions => {
                let (progress, question) = {
                    let session = controller.session();
                    let bank = controller.service().bank();
                    (
                        session.progress_label(bank),
                        session.current_question(bank).unwrap_or_default().to_string(),
                    )
                };
                writeln!(out, "{progress}")?;
                writeln!(out, "{question}")?;
                let Some(answer) = prompt(&mut lines, out, "> ").await? else {
                    return Ok(());
                };
                controller.dispatch(Event::EditAnswer(answer))?;
                if controller.session().can_submit_answer() {
                    writeln!(out, "Processing...")?;
                }
                if let Err(err) = controller.submit_answer().await {
                    writeln!(out, "{}", err.message())?;
                }
            }
            Stage::Countdown => {
                writeln!(out, "Get ready")?;
                writeln!(out, "{}", controller.session().countdown())?;
                while let Some(session) = controller.next_tick().await {
                    if session.stage() == Stage::Countdown {
                        writeln!(out, "{}", session.countdown())?;
                    }
                }
            }
            Stage::Final => {
                let session = controller.session();
                writeln!(out, "Thank you, {}", session.credentials().username())?;
                for (i, answer) in session.answers().iter().enumerate() {
                    writeln!(out, "{}. {}", i + 1, answer.question)?;
                    writeln!(out, "   {}", answer.answer)?;
                }
                writeln!(out, "Transcript:")?;
                writeln!(out, "{}", serde_json::to_string_pretty(session.answers())?)?;

                let Some(line) = prompt(&mut lines, out, "Start over? [y/N] ").await? else {
                    return Ok(());
                };
                if !line.trim().eq_ignore_ascii_case("y") {
                    return Ok(());
                }
                controller.dispatch(Event::Restart)?;
            }
        }
    }
}

async fn prompt<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    label: &str,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    lines.next_line().await
}
