//! Algle
//!
//! A daily guessing game where the hidden word is a Rubik's cube algorithm.
//! Every guess is scored move by move: exact, right face with the wrong
//! direction, or wrong.
//!
//! # Quick Start
//!
//! ```rust
//! use algle::catalog::Catalog;
//! use algle::game::{Session, Terminal};
//! use algle::puzzle::{GameConfig, MemoryStore, select_solution};
//! use chrono::NaiveDate;
//!
//! let catalog = Catalog::embedded();
//! let config = GameConfig::default();
//! let mut store = MemoryStore::new();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let selection = select_solution(&catalog, today, &config, &mut store).unwrap();
//!
//! let session = Session::new(selection.day, selection.solution.clone());
//! let session = session.submit_guess(&selection.solution).unwrap();
//! assert_eq!(session.terminal(), Terminal::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine and share text
pub mod game;

// Daily puzzle selection and persistence
pub mod puzzle;

// Algorithm catalogs
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
