//! Interactive menu shell
//!
//! A numbered menu over any line-oriented input, so it runs the same against
//! a terminal, a pipe or a test buffer. Invalid input and ledger errors are
//! reported and the menu is shown again; end of input leaves without saving.

use std::io::{BufRead, Write};

use super::transaction::{handle_add, handle_history, handle_remove};
use super::{handle_report, handle_status, Session};
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionType;

const MENU: &str = "
1. Add Income
2. Add Expense
3. View Status
4. View History
5. Category Report
6. Delete Transaction
7. Save
8. Save and Exit
9. Exit Without Saving
";

enum LoopControl {
    Continue,
    Exit,
}

struct Shell<'a, R, W> {
    session: &'a mut Session,
    input: R,
    out: &'a mut W,
}

/// Run the menu loop until the user exits or input ends
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> LedgerResult<()> {
    let mut shell = Shell {
        session,
        input,
        out,
    };
    shell.run()
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    fn run(&mut self) -> LedgerResult<()> {
        tracing::debug!(path = %self.session.path().display(), "starting interactive shell");

        loop {
            write!(self.out, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                writeln!(self.out)?;
                writeln!(self.out, "End of input, exiting without saving.")?;
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => return Ok(()),
                Err(err) if is_recoverable(&err) => writeln!(self.out, "Error: {}", err)?,
                Err(err) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> LedgerResult<LoopControl> {
        match choice {
            "1" => self.add(TransactionType::Income),
            "2" => self.add(TransactionType::Expense),
            "3" => {
                handle_status(self.session, self.out)?;
                Ok(LoopControl::Continue)
            }
            "4" => {
                handle_history(self.session, self.out, Some(0))?;
                Ok(LoopControl::Continue)
            }
            "5" => {
                handle_report(self.session, self.out)?;
                Ok(LoopControl::Continue)
            }
            "6" => self.delete(),
            "7" => {
                self.save()?;
                Ok(LoopControl::Continue)
            }
            "8" => {
                if self.save()? {
                    Ok(LoopControl::Exit)
                } else {
                    Ok(LoopControl::Continue)
                }
            }
            "9" => {
                writeln!(self.out, "Exiting without saving.")?;
                Ok(LoopControl::Exit)
            }
            _ => {
                writeln!(self.out, "Invalid choice, please try again.")?;
                Ok(LoopControl::Continue)
            }
        }
    }

    fn add(&mut self, trans_type: TransactionType) -> LedgerResult<LoopControl> {
        let Some(amount) = self.prompt(&format!("Enter {} amount: ", trans_type))? else {
            return Ok(LoopControl::Exit);
        };
        let Ok(amount) = amount.trim().parse::<f64>() else {
            writeln!(
                self.out,
                "Invalid amount entered. Please enter a numerical value."
            )?;
            return Ok(LoopControl::Continue);
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(LoopControl::Exit);
        };
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or leave blank for today: ")? else {
            return Ok(LoopControl::Exit);
        };
        let date = Some(date.trim()).filter(|d| !d.is_empty());

        handle_add(self.session, self.out, trans_type, amount, category, date)?;
        Ok(LoopControl::Continue)
    }

    fn delete(&mut self) -> LedgerResult<LoopControl> {
        let Some(index) = self.prompt("Enter transaction index: ")? else {
            return Ok(LoopControl::Exit);
        };
        let Ok(index) = index.trim().parse::<usize>() else {
            writeln!(
                self.out,
                "Invalid index entered. Please enter a whole number."
            )?;
            return Ok(LoopControl::Continue);
        };

        handle_remove(self.session, self.out, index)?;
        Ok(LoopControl::Continue)
    }

    /// Save the ledger; a failed save is reported and the session stays open
    fn save(&mut self) -> LedgerResult<bool> {
        match self.session.save() {
            Ok(()) => {
                writeln!(self.out, "Budget saved to {}", self.session.path().display())?;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(path = %self.session.path().display(), error = %err, "save failed");
                writeln!(self.out, "Error: {}", err)?;
                Ok(false)
            }
        }
    }

    /// Print `label` and read one line without its terminator; `None` at end of input
    fn prompt(&mut self, label: &str) -> LedgerResult<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Errors the user can fix by trying again; anything else ends the shell
fn is_recoverable(err: &LedgerError) -> bool {
    matches!(
        err,
        LedgerError::Validation(_) | LedgerError::IndexOutOfRange { .. }
    )
}
