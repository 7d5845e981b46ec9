//! Ringpuffer der ausgeführten App-Commands für Diagnose und Replays.

use super::AppCommand;
use std::collections::VecDeque;

/// Obergrenze gehaltener Einträge; ältere fallen vorne heraus.
const CAPACITY: usize = 512;

/// Ein geloggter Command mit fortlaufender Nummer.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    /// Monoton steigende Sequenznummer (überlebt das Verwerfen alter Einträge)
    pub seq: u64,
    /// Der ausgeführte Command
    pub command: AppCommand,
}

/// Speichert die zuletzt ausgeführten Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    next_seq: u64,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an und gibt seine Sequenznummer zurück.
    pub fn record(&mut self, command: &AppCommand) -> u64 {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push_back(LoggedCommand {
            seq,
            command: command.clone(),
        });
        seq
    }

    /// Anzahl gehaltener Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn noch nichts geloggt wurde oder alles verworfen ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|entry| &entry.command)
    }

    /// Alle gehaltenen Commands, älteste zuerst.
    pub fn commands(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter().map(|entry| &entry.command)
    }

    /// Einträge ab Sequenznummer `seq` (inklusive), z.B. für einen Replay.
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &LoggedCommand> + '_ {
        self.entries.iter().filter(move |entry| entry.seq >= seq)
    }
}
