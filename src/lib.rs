//! # libcli - Embedded command-line SDK
//!
//! A Rust library that brings interactive line editing, command history, and
//! command dispatch to any device speaking over a character-oriented serial
//! channel. This library is designed for embedded systems and supports
//! `no_std` environments.
//!
//! ## Features
//!
//! ### Line Editing
//! - **Cursor-aware editing**: insert, delete, home/end, left/right motion
//! - **History recall**: bounded, packed storage of prior lines, newest first
//! - **Keystroke engine**: one decoded event in, matching screen effects out
//!
//! ### Command Dispatch
//! - **Tokenizer**: whitespace- and quote-delimited token scanning
//! - **Dispatcher**: ordered keyword table, first match wins, keyword listing
//!   on no match
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   EventSource   │───▶│    Keystroke    │───▶│    Tokenizer/   │
//! │   (decoded      │    │    Engine       │    │    Dispatcher   │
//! │   keystrokes)   │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                           │           │                │
//!                           ▼           ▼                ▼
//!                  ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!                  │ Line Buffer │ │   History   │ │  Terminal   │
//!                  │  (cursor)   │ │   Store     │ │  (effects)  │
//!                  └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! The host decodes raw bytes (including ANSI escape sequences) into
//! [`terminal::InputEvent`] values upstream of this crate, and renders the
//! emitted [`terminal::Terminal`] effects downstream of it. Everything in
//! between (buffer mutation, history packing, token scanning, handler
//! lookup) is pure, fixed-capacity, and heap-free.
//!
//! ## Usage
//!
//! ```rust
//! use libcli::command::{run_command, Command, Tokens};
//! use libcli::editor::{History, LineBuffer};
//! use libcli::terminal::{EventSource, InputEvent, Terminal};
//!
//! fn go(term: &mut dyn Terminal, mut args: Tokens<'_>) {
//!     term.write_str("going to ");
//!     term.write_str(args.next());
//! }
//!
//! const COMMANDS: &[Command] = &[Command { name: "go", handler: go }];
//!
//! # struct Script(std::vec::Vec<InputEvent>);
//! # impl EventSource for Script {
//! #     fn poll(&mut self) -> Option<InputEvent> {
//! #         if self.0.is_empty() { None } else { Some(self.0.remove(0)) }
//! #     }
//! # }
//! # struct Echo(String);
//! # impl Terminal for Echo {
//! #     fn write(&mut self, byte: u8) { self.0.push(byte as char); }
//! #     fn cursor_left(&mut self, _n: usize) {}
//! #     fn cursor_right(&mut self, _n: usize) {}
//! #     fn insert_char(&mut self) {}
//! #     fn delete_char(&mut self) {}
//! # }
//! let mut source = Script(b"go home".iter().map(|&b| InputEvent::Char(b))
//!     .chain([InputEvent::Submit]).collect());
//! let mut term = Echo(String::new());
//!
//! // Buffers are owned by the caller; nothing is allocated or static.
//! let mut line = LineBuffer::<80>::new();
//! let mut history = History::<256>::new();
//!
//! run_command(&mut source, &mut term, &mut line, &mut history, COMMANDS, None);
//! assert!(term.0.ends_with("going to home"));
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, AVR-class parts)
//! - Linux-based devices talking to a serial console
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Capability boundary between this crate and the host's terminal plumbing.
///
/// Contains the decoded keystroke event type and the abstract input/output
/// traits the editor and dispatcher are written against.
pub mod terminal;

/// Line editing core: the cursor-aware line buffer, the packed command
/// history store, and the keystroke engine that drives them.
pub mod editor;

/// Token scanning and command dispatch for finished lines.
pub mod command;
