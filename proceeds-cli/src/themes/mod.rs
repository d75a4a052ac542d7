//! Terminal color themes.
//!
//! Themes only change how figures are painted, never the figures themselves.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// What a painted span represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Headline and positive figures.
    Accent,
    /// Selling expenses.
    Expense,
    /// Debt payoff.
    Debt,
    /// Negative figures.
    Negative,
    /// Labels and footnotes.
    Muted,
}

/// ANSI escape sequences for each [`Role`]. Empty when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    accent: &'static str,
    expense: &'static str,
    debt: &'static str,
    negative: &'static str,
    muted: &'static str,
    reset: &'static str,
}

impl Palette {
    pub fn new(
        theme: Theme,
        color: bool,
    ) -> Self {
        if !color {
            return Self::plain();
        }
        match theme {
            Theme::Dark => Self {
                accent: "\x1b[1;92m",
                expense: "\x1b[38;5;215m",
                debt: "\x1b[38;5;105m",
                negative: "\x1b[91m",
                muted: "\x1b[2m",
                reset: "\x1b[0m",
            },
            Theme::Light => Self {
                accent: "\x1b[1;32m",
                expense: "\x1b[38;5;166m",
                debt: "\x1b[38;5;61m",
                negative: "\x1b[31m",
                muted: "\x1b[90m",
                reset: "\x1b[0m",
            },
        }
    }

    /// A palette that writes no escape sequences.
    pub fn plain() -> Self {
        Self {
            accent: "",
            expense: "",
            debt: "",
            negative: "",
            muted: "",
            reset: "",
        }
    }

    pub fn paint(
        &self,
        role: Role,
        text: &str,
    ) -> String {
        let start = match role {
            Role::Accent => self.accent,
            Role::Expense => self.expense,
            Role::Debt => self.debt,
            Role::Negative => self.negative,
            Role::Muted => self.muted,
        };
        if start.is_empty() {
            text.to_string()
        } else {
            format!("{start}{text}{}", self.reset)
        }
    }
}
