//! The console menu that drives a [`SinglyLinkedList`].
//!
//! The menu owns all of the text handling: it prompts, parses integers and turns the list's
//! reported conditions into messages. The list itself never sees a string. Input is read a line
//! at a time, one integer per line, from any [`BufRead`] so that the menu can be driven by a script
//! as easily as by a terminal.

mod input;
mod tests;

use std::io::{self, BufRead, Write};

use derive_more::{Display, Error, From};
use tracing::{debug, info, warn};

pub use input::InputError;
use input::Prompter;

use crate::collections::linked::{CreateStopped, DeleteError, SinglyLinkedList, StopCause};

/// The only failure the menu can't report to the user and keep going: the output (or input)
/// stream itself broke.
#[derive(Debug, Display, Error, From)]
pub enum MenuError {
    Io(io::Error),
}

/// The top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Create,
    Insert,
    Delete,
    Display,
    Exit,
}

impl Choice {
    pub const fn from_number(number: i32) -> Option<Choice> {
        match number {
            1 => Some(Choice::Create),
            2 => Some(Choice::Insert),
            3 => Some(Choice::Delete),
            4 => Some(Choice::Display),
            5 => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// What the main loop should do after handling a choice.
enum Flow {
    Continue,
    Exit,
}

const MENU: &str = "\n--- Linked List Menu ---\n\
    1. Create list\n\
    2. Insert node\n\
    3. Delete node\n\
    4. Display list\n\
    5. Exit\n\
    Choose an option: ";

/// An interactive menu over a single list.
pub struct Menu<R, W> {
    input: R,
    output: W,
    list: SinglyLinkedList,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Menu<R, W> {
        Menu::with_list(input, output, SinglyLinkedList::new())
    }

    /// Creates a menu that starts with an existing list.
    pub fn with_list(input: R, output: W, list: SinglyLinkedList) -> Menu<R, W> {
        Menu { input, output, list }
    }

    pub const fn list(&self) -> &SinglyLinkedList {
        &self.list
    }

    /// Consumes the menu, returning the output stream and the list as they were left.
    pub fn into_parts(self) -> (W, SinglyLinkedList) {
        (self.output, self.list)
    }

    /// Runs the menu until the user exits or the input ends. The list is released before
    /// returning, the same as when exiting normally.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            let read = self.prompter().read_int(MENU);
            let choice = match read {
                Ok(number) => number,
                Err(InputError::Eof) => break,
                Err(InputError::Io(error)) => return Err(error.into()),
                Err(InputError::Parse(_)) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                },
            };

            let flow = match Choice::from_number(choice) {
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.handle(choice)?
                },
                None => {
                    writeln!(self.output, "Unknown option.")?;
                    Flow::Continue
                },
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        let released = self.list.clear();
        info!(released, "exiting menu");
        writeln!(self.output, "Exiting.")?;
        Ok(())
    }

    fn handle(&mut self, choice: Choice) -> Result<Flow, MenuError> {
        match choice {
            Choice::Create => self.create()?,
            Choice::Insert => self.insert()?,
            Choice::Delete => self.delete()?,
            Choice::Display => self.display()?,
            Choice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn create(&mut self) -> Result<(), MenuError> {
        let read = self.prompter().read_int("How many nodes to create? ");
        let count = match read {
            Ok(count) => usize::try_from(count).ok(),
            Err(InputError::Io(error)) => return Err(error.into()),
            Err(_) => None,
        };
        let Some(count) = count else {
            writeln!(self.output, "Invalid number.")?;
            return Ok(());
        };

        self.list.clear();

        let mut prompter = Prompter {
            input: &mut self.input,
            output: &mut self.output,
        };
        let source = (1..=count)
            .map(|node| prompter.read_int(&format!("Enter value for node {node}: ")));
        // A node that can't be allocated is skipped and the remaining values are still read.
        let mut skipped = Vec::new();
        let created = SinglyLinkedList::create_list_with(count, source, |_, error| {
            skipped.push(error);
        });
        for error in skipped {
            writeln!(self.output, "{error}")?;
        }

        let CreateStopped { list, node, cause } = match created {
            Ok(list) => {
                info!(len = list.len(), "created list");
                self.list = list;
                return Ok(());
            },
            Err(stopped) => stopped,
        };

        // Whatever stopped the creation, the nodes created so far are kept.
        warn!(node, created = list.len(), "list creation stopped early");
        self.list = list;
        match cause {
            StopCause::InvalidInput(InputError::Io(error)) => return Err(error.into()),
            StopCause::InvalidInput(_) | StopCause::Exhausted => {
                writeln!(self.output, "Invalid input. Stopping creation.")?
            },
        }
        Ok(())
    }

    fn insert(&mut self) -> Result<(), MenuError> {
        let Some(kind) = self.read_or_report("Insert: 1-Beginning 2-End 3-Position. Choose: ")?
        else {
            return Ok(());
        };
        let Some(value) = self.read_or_report("Enter value: ")? else {
            return Ok(());
        };

        let result = match kind {
            1 => self.list.insert_at_start(value),
            2 => self.list.insert_at_end(value),
            3 => {
                let Some(position) = self.read_or_report("Enter position (1-based): ")? else {
                    return Ok(());
                };
                self.list.insert_at_position(value, position)
            },
            _ => {
                writeln!(self.output, "Unknown insert choice.")?;
                return Ok(());
            },
        };

        if let Err(error) = result {
            warn!(value, "insert failed: {error}");
            writeln!(self.output, "{error}")?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), MenuError> {
        let Some(kind) =
            self.read_or_report("Delete: 1-Beginning 2-End 3-Position 4-By value. Choose: ")?
        else {
            return Ok(());
        };

        let result: Result<(), DeleteError> = match kind {
            1 => self.list.delete_from_start().map(drop).map_err(Into::into),
            2 => self.list.delete_from_end().map(drop).map_err(Into::into),
            3 => {
                let Some(position) = self.read_or_report("Enter position (1-based): ")? else {
                    return Ok(());
                };
                self.list.delete_at_position(position).map(drop)
            },
            4 => {
                let Some(value) = self.read_or_report("Enter value to delete: ")? else {
                    return Ok(());
                };
                self.list.delete_by_value(value).map(drop)
            },
            _ => {
                writeln!(self.output, "Unknown delete choice.")?;
                return Ok(());
            },
        };

        if let Err(error) = result {
            writeln!(self.output, "{error}")?;
        }
        Ok(())
    }

    fn display(&mut self) -> Result<(), MenuError> {
        let Ok(values) = self.list.values() else {
            writeln!(self.output, "List is empty.")?;
            return Ok(());
        };

        write!(self.output, "List: ")?;
        for value in values {
            write!(self.output, "{value} ")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Reads an integer for a sub-menu. Anything that isn't an integer is reported and yields
    /// `None`, sending the user back to the main menu.
    fn read_or_report(&mut self, prompt: &str) -> Result<Option<i32>, MenuError> {
        let read = self.prompter().read_int(prompt);
        match read {
            Ok(value) => Ok(Some(value)),
            Err(InputError::Io(error)) => Err(error.into()),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            },
        }
    }

    fn prompter(&mut self) -> Prompter<'_, R, W> {
        Prompter {
            input: &mut self.input,
            output: &mut self.output,
        }
    }
}
