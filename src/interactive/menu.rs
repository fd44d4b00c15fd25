//! Menu parsing and rendering.

use nu_ansi_term::{Color, Style};

use crate::clock::Expiry;
use crate::pet::{Mood, Portion, Species, StatusReport};

/// A menu entry picked by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Status,
    /// `None` means the player still has to say how much.
    Feed(Option<Portion>),
    Play(Option<Portion>),
    Talk,
    Help,
    Quit,
}

/// Numbered entries, shown in this order.
pub const MENU_ENTRIES: [(&str, &str); 9] = [
    ("1", "Status"),
    ("2", "Feed"),
    ("3", "Feed (random)"),
    ("4", "Feed (custom amount)"),
    ("5", "Play"),
    ("6", "Play (random)"),
    ("7", "Play (custom amount)"),
    ("8", "Talk"),
    ("9", "Quit"),
];

impl MenuChoice {
    /// Parse a menu line: a number or keyword, optionally followed by an amount
    /// (`feed 7`, `4 7`) or `random`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return None;
        }

        match command.as_str() {
            "1" | "status" | "s" => argument.is_none().then_some(MenuChoice::Status),
            "2" | "feed" | "f" => care_portion(argument, Portion::Fixed).map(MenuChoice::Feed),
            "3" => argument.is_none().then_some(MenuChoice::Feed(Some(Portion::Random))),
            "4" => custom_portion(argument).map(MenuChoice::Feed),
            "5" | "play" | "p" => care_portion(argument, Portion::Fixed).map(MenuChoice::Play),
            "6" => argument.is_none().then_some(MenuChoice::Play(Some(Portion::Random))),
            "7" => custom_portion(argument).map(MenuChoice::Play),
            "8" | "talk" | "speak" | "t" => argument.is_none().then_some(MenuChoice::Talk),
            "9" | "quit" | "exit" | "q" => argument.is_none().then_some(MenuChoice::Quit),
            "help" | "h" | "?" => Some(MenuChoice::Help),
            _ => None,
        }
    }
}

fn care_portion(argument: Option<&str>, default: Portion) -> Option<Option<Portion>> {
    match argument {
        None => Some(Some(default)),
        Some(arg) if arg.eq_ignore_ascii_case("random") => Some(Some(Portion::Random)),
        Some(arg) if arg.eq_ignore_ascii_case("custom") => Some(None),
        Some(arg) => arg.parse().ok().map(|amount| Some(Portion::Custom(amount))),
    }
}

fn custom_portion(argument: Option<&str>) -> Option<Option<Portion>> {
    match argument {
        None => Some(None),
        Some(arg) => arg.parse().ok().map(|amount| Some(Portion::Custom(amount))),
    }
}

pub fn render_menu() -> String {
    let key = Style::new().fg(Color::Yellow).bold();
    let mut out = String::from("What would you like to do?\n");
    for (number, label) in MENU_ENTRIES {
        out.push_str(&format!("  {} {}\n", key.paint(number), label));
    }
    out
}

pub fn render_species_prompt() -> String {
    let key = Style::new().fg(Color::Yellow).bold();
    let mut out = String::from("What kind of pet is it?\n");
    for (index, species) in Species::ALL.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", key.paint((index + 1).to_string()), species));
    }
    out
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  status            show how your pet is doing",
        "  feed [n|random]   lower hunger by 5, a random 3-7, or n",
        "  play [n|random]   lower boredom by 5, a random 3-7, or n",
        "  talk              hear what your pet has to say",
        "  quit              leave the game",
    ]
    .join("\n")
}

/// Colour for a mood, from green to red.
pub fn mood_style(mood: Mood) -> Style {
    let color = match mood {
        Mood::ExtremelyHappy | Mood::Happy => Color::Green,
        Mood::Content => Color::Cyan,
        Mood::Unhappy => Color::Yellow,
        Mood::Mad | Mood::RagingMad => Color::LightRed,
        Mood::PassedOut => Color::Red,
    };
    Style::new().fg(color).bold()
}

/// Same fields as the plain report, with the mood coloured.
pub fn render_status(report: &StatusReport) -> String {
    format!(
        "Name: {}\nType: {}\nHunger: {}\nBoredom: {}\nMood: {}",
        report.name,
        report.species,
        report.hunger,
        report.boredom,
        mood_style(report.mood).paint(report.mood.label())
    )
}

pub fn render_game_over(expiry: &Expiry) -> String {
    format!("It seems that {expiry}! The game is over. Do you want to restart? (y/n)")
}

/// Only answers starting with `y` restart.
pub fn wants_restart(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}
