//! Interactive Console Game
//!
//! Menu-driven front end for a [`PetSession`]:
//! - Asks for the pet's name and species unless configured
//! - Reads menu choices while the clock keeps running
//! - Shows the game-over prompt when the pet passes out
//! - Restarts with a fresh pet or exits

pub mod menu;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, info};

use crate::clock::Expiry;
use crate::config::GameConfig;
use crate::errors::{PetError, Result};
use crate::pet::{PetState, Portion, Species};
use crate::session::{PetSession, SessionOptions};

use self::menu::{
    render_game_over, render_help, render_menu, render_species_prompt, render_status,
    wants_restart, MenuChoice,
};

/// Something that happened while waiting on the player.
enum Event {
    Line(String),
    Expired(Expiry),
    /// Input ended or the clock was stopped elsewhere.
    Closed,
}

/// How a single session ended.
enum Ending {
    Quit,
    Expired(Expiry),
}

/// Console game loop over any line-based input and writer.
pub struct Game<R, W> {
    lines: Lines<R>,
    out: W,
    config: GameConfig,
    options: SessionOptions,
}

impl<R, W> Game<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, out: W, config: GameConfig, options: SessionOptions) -> Self {
        Self {
            lines: input.lines(),
            out,
            config,
            options,
        }
    }

    /// Play until the player quits, declines a restart, or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let Some(pet) = self.create_pet().await? else {
                return Ok(());
            };

            let mut session = PetSession::with_options(pet, self.options);
            let ending = self.play_session(&mut session).await;
            session.stop_clock()?;

            match ending? {
                Ending::Quit => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                Ending::Expired(expiry) => {
                    let answer = self.ask(&render_game_over(&expiry)).await?;
                    if !answer.as_deref().is_some_and(wants_restart) {
                        info!("Player declined to restart");
                        return Ok(());
                    }
                    info!("Restarting with a new pet");
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    async fn create_pet(&mut self) -> Result<Option<PetState>> {
        let name = match self.config.name.clone() {
            Some(name) => name,
            None => loop {
                match self.ask("What is your pet's name?").await? {
                    None => return Ok(None),
                    Some(name) if name.trim().is_empty() => {}
                    Some(name) => break name.trim().to_string(),
                }
            },
        };

        let species = match self.config.species {
            Some(species) => species,
            None => loop {
                let Some(answer) = self.ask(&render_species_prompt()).await? else {
                    return Ok(None);
                };
                match answer.parse::<Species>() {
                    Ok(species) => break species,
                    Err(e) => writeln!(self.out, "{e}")?,
                }
            },
        };

        Ok(Some(PetState::with_levels(
            name,
            species,
            self.config.hunger.unwrap_or(0),
            self.config.boredom.unwrap_or(0),
        )))
    }

    async fn play_session(&mut self, session: &mut PetSession) -> Result<Ending> {
        let name = session.snapshot()?.name();
        writeln!(self.out, "Say hello to {name}!")?;
        writeln!(self.out, "{}", render_menu())?;

        loop {
            self.prompt()?;
            let line = match self.next_event(session).await? {
                Event::Line(line) => line,
                Event::Expired(expiry) => return Ok(Ending::Expired(expiry)),
                Event::Closed => return Ok(Ending::Quit),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                if !line.trim().is_empty() {
                    writeln!(self.out, "Unknown choice '{}'. Type 'help' for commands.", line.trim())?;
                }
                continue;
            };
            debug!(?choice, "Menu choice");

            let choice = match choice {
                MenuChoice::Feed(None) | MenuChoice::Play(None) => {
                    match self.ask_amount(session).await? {
                        Event::Line(amount) => match amount.trim().parse::<i64>() {
                            Ok(amount) => match choice {
                                MenuChoice::Feed(_) => MenuChoice::Feed(Some(Portion::Custom(amount))),
                                _ => MenuChoice::Play(Some(Portion::Custom(amount))),
                            },
                            Err(_) => {
                                writeln!(self.out, "'{}' is not a number.", amount.trim())?;
                                continue;
                            }
                        },
                        Event::Expired(expiry) => return Ok(Ending::Expired(expiry)),
                        Event::Closed => return Ok(Ending::Quit),
                    }
                }
                other => other,
            };

            match choice {
                MenuChoice::Status => {
                    let report = session.status_report()?;
                    writeln!(self.out, "{}", render_status(&report))?;
                }
                MenuChoice::Feed(Some(portion)) => {
                    let outcome = session.feed(portion);
                    self.report_care(outcome, &name, "Hunger")?;
                }
                MenuChoice::Play(Some(portion)) => {
                    let outcome = session.play(portion);
                    self.report_care(outcome, &name, "Boredom")?;
                }
                MenuChoice::Talk => {
                    writeln!(self.out, "{name} says: {}", session.speak()?)?;
                }
                MenuChoice::Help => writeln!(self.out, "{}\n\n{}", render_help(), render_menu())?,
                MenuChoice::Quit => return Ok(Ending::Quit),
                MenuChoice::Feed(None) | MenuChoice::Play(None) => {}
            }
        }
    }

    fn report_care(&mut self, outcome: Result<u64>, name: &str, counter: &str) -> Result<()> {
        match outcome {
            Ok(value) => writeln!(self.out, "{name} looks happier. {counter} is now {value}.")?,
            // The expiry notice arrives on the next read; just report it here.
            Err(e) if e.is_recoverable() || matches!(e, PetError::PetExpired { .. }) => {
                writeln!(self.out, "{e}")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    async fn ask_amount(&mut self, session: &mut PetSession) -> Result<Event> {
        write!(self.out, "How much? > ")?;
        self.out.flush()?;
        self.next_event(session).await
    }

    /// Wait for whichever comes first: a line of input or the expiry notice.
    async fn next_event(&mut self, session: &mut PetSession) -> Result<Event> {
        let watching = session.is_watching();

        tokio::select! {
            expiry = session.expired(), if watching => {
                Ok(expiry.map_or(Event::Closed, Event::Expired))
            }
            line = self.lines.next_line() => {
                Ok(line?.map_or(Event::Closed, Event::Line))
            }
        }
    }

    async fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.out, "{question}")?;
        self.prompt()?;
        Ok(self.lines.next_line().await?)
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, " > ")?;
        self.out.flush()?;
        Ok(())
    }
}
