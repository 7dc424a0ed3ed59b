//! Instruction interpreter for registry scenarios.
//!
//! This module provides a simple DSL for exercising the media registry from
//! the command line. Instructions follow the format:
//!
//! `ACTION arguments...`
//!
//! where:
//! - ACTION := "ARCHIVE" | "GET" | "MODIFY" | "TRANSFER" | "REMOVE" | "GRANT" | "REVOKE" | "CHECK" | "HELP"
//! - arguments are whitespace-separated tokens; label sets are comma-separated
//!
//! Examples:
//! - `ARCHIVE alice clip.mp4 1024 demo video,tutorial`
//! - `GET 1`
//! - `MODIFY alice 1 clip_v2.mp4 2048 remaster video,hd`
//! - `TRANSFER alice 1 bob`
//! - `GRANT alice 1 bob`
//! - `CHECK 1 bob`

use std::convert::TryFrom;

use medialedger_core::registry::{
    RegistryDefaultStack,
    api::{RegistryRequest, RegistryResponse},
    infrastructure::naming::{LedgerClock, Principal, RecordId},
    init_registry,
};
use tower::Service;

/// Represents a command action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Nil,
    Archive,
    Get,
    Modify,
    Transfer,
    Remove,
    Grant,
    Revoke,
    Check,
    Help,
}

impl Command {
    /// Parse a command from a string
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_uppercase().as_str() {
            "ARCHIVE" | "A" => Ok(Command::Archive),
            "GET" | "G" => Ok(Command::Get),
            "MODIFY" | "M" => Ok(Command::Modify),
            "TRANSFER" | "T" => Ok(Command::Transfer),
            "REMOVE" | "RM" => Ok(Command::Remove),
            "GRANT" | "GR" => Ok(Command::Grant),
            "REVOKE" | "RV" => Ok(Command::Revoke),
            "CHECK" | "C" => Ok(Command::Check),
            "HELP" | "H" | "?" => Ok(Command::Help),
            _ => Err(anyhow::anyhow!("Unknown command: {}", s)),
        }
    }

    fn arity(&self) -> usize {
        match self {
            Command::Nil => 1,
            Command::Help => 1,
            Command::Get => 2,
            Command::Remove => 3,
            Command::Check => 3,
            Command::Transfer => 4,
            Command::Grant => 4,
            Command::Revoke => 4,
            Command::Archive => 6,
            Command::Modify => 7,
        }
    }
}

/// A fully parsed registry instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Nil,
    Help,
    Archive { caller: String, name: String, byte_count: u64, summary: String, labels: Vec<String> },
    Get { record_id: RecordId },
    Modify {
        caller: String,
        record_id: RecordId,
        name: String,
        byte_count: u64,
        summary: String,
        labels: Vec<String>,
    },
    Transfer { caller: String, record_id: RecordId, new_owner: String },
    Remove { caller: String, record_id: RecordId },
    Grant { caller: String, record_id: RecordId, principal: String },
    Revoke { caller: String, record_id: RecordId, principal: String },
    Check { record_id: RecordId, principal: String },
}

fn parse_record_id(token: &str) -> anyhow::Result<RecordId> {
    token.parse::<RecordId>().map_err(|_| anyhow::anyhow!("Invalid record id: {}", token))
}

fn parse_byte_count(token: &str) -> anyhow::Result<u64> {
    token.parse::<u64>().map_err(|_| anyhow::anyhow!("Invalid byte count: {}", token))
}

fn parse_labels(token: &str) -> Vec<String> {
    token.split(',').filter(|label| !label.is_empty()).map(|label| label.to_string()).collect()
}

impl TryFrom<&str> for Instruction {
    type Error = anyhow::Error;

    /// Parse an instruction string in the format "ACTION arguments..."
    ///
    /// # Examples
    /// - `ARCHIVE alice clip.mp4 1024 demo video,tutorial`
    /// - `TRANSFER alice 1 bob`
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();

        // Skip empty lines and comments
        if s.is_empty() || s.starts_with('#') {
            return Ok(Instruction::Nil);
        }

        let parts: Vec<&str> = s.split_whitespace().collect();
        let command = Command::parse(parts[0])?;
        if command.arity() != parts.len() {
            return Err(anyhow::anyhow!(
                "Invalid number of arguments for command: {}, expected {}, got {}",
                parts[0],
                command.arity(),
                parts.len()
            ));
        }

        Ok(match command {
            Command::Nil => Instruction::Nil,
            Command::Help => Instruction::Help,
            Command::Archive => Instruction::Archive {
                caller: parts[1].to_string(),
                name: parts[2].to_string(),
                byte_count: parse_byte_count(parts[3])?,
                summary: parts[4].to_string(),
                labels: parse_labels(parts[5]),
            },
            Command::Get => Instruction::Get { record_id: parse_record_id(parts[1])? },
            Command::Modify => Instruction::Modify {
                caller: parts[1].to_string(),
                record_id: parse_record_id(parts[2])?,
                name: parts[3].to_string(),
                byte_count: parse_byte_count(parts[4])?,
                summary: parts[5].to_string(),
                labels: parse_labels(parts[6]),
            },
            Command::Transfer => Instruction::Transfer {
                caller: parts[1].to_string(),
                record_id: parse_record_id(parts[2])?,
                new_owner: parts[3].to_string(),
            },
            Command::Remove => Instruction::Remove {
                caller: parts[1].to_string(),
                record_id: parse_record_id(parts[2])?,
            },
            Command::Grant => Instruction::Grant {
                caller: parts[1].to_string(),
                record_id: parse_record_id(parts[2])?,
                principal: parts[3].to_string(),
            },
            Command::Revoke => Instruction::Revoke {
                caller: parts[1].to_string(),
                record_id: parse_record_id(parts[2])?,
                principal: parts[3].to_string(),
            },
            Command::Check => Instruction::Check {
                record_id: parse_record_id(parts[1])?,
                principal: parts[2].to_string(),
            },
        })
    }
}

impl TryFrom<String> for Instruction {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Instruction, anyhow::Error> {
        Instruction::try_from(s.as_str())
    }
}

fn print_help() {
    println!("Available instructions:");
    println!("Record operations:");
    println!(" $ ARCHIVE <caller> <name> <bytes> <summary> <labels>   # Archive a new media record");
    println!(" $ GET <id>                                             # Fetch a record by id");
    println!(" $ MODIFY <caller> <id> <name> <bytes> <summary> <labels> # Replace a record's metadata");
    println!(" $ TRANSFER <caller> <id> <new_owner>                   # Transfer record ownership");
    println!(" $ REMOVE <caller> <id>                                 # Remove a record");
    println!();
    println!("Access operations:");
    println!(" $ GRANT <caller> <id> <principal>                      # Grant access to a principal");
    println!(" $ REVOKE <caller> <id> <principal>                     # Revoke a principal's access");
    println!(" $ CHECK <id> <principal>                               # Check a principal's access");
    println!();
    println!("Utility:");
    println!(" $ HELP                                                 # Show this help message");
    println!(" $ # [comment]                                          # Comment line");
    println!(" $                                                      # No operation");
    println!();
    println!("Argument format:");
    println!(" - Labels are comma-separated without spaces: video,tutorial,hd");
    println!(" - Names and summaries are single whitespace-free tokens");
    println!();
}

/// Drives an in-process registry from parsed instructions.
#[derive(Debug)]
pub struct RegistryHandler {
    registry: RegistryDefaultStack,
}

impl RegistryHandler {
    /// Create a handler over a fresh, empty registry
    pub fn new() -> Self {
        Self { registry: init_registry(LedgerClock::default()) }
    }

    /// Execute an instruction against the managed registry
    pub async fn execute(&mut self, instruction: &Instruction) -> anyhow::Result<()> {
        match instruction.clone() {
            Instruction::Nil => Ok(()),
            Instruction::Help => {
                print_help();
                Ok(())
            }
            Instruction::Archive { caller, name, byte_count, summary, labels } => {
                let response = self
                    .registry
                    .call(RegistryRequest::ArchiveNewMedia {
                        caller: Principal::new(caller),
                        name,
                        byte_count,
                        summary,
                        labels,
                    })
                    .await?;
                if let RegistryResponse::RecordId(record_id) = response {
                    println!("✓ Archived record: {}", record_id);
                }
                Ok(())
            }
            Instruction::Get { record_id } => {
                let response =
                    self.registry.call(RegistryRequest::GetMediaRecord { record_id }).await?;
                match response {
                    RegistryResponse::Record(Some(record)) => {
                        println!(
                            "✓ Record {}: name={}, owner={}, bytes={}, height={}, summary={}, labels={}",
                            record_id,
                            record.name,
                            record.owner,
                            record.byte_count,
                            record.created_at,
                            record.summary,
                            record.labels.join(",")
                        );
                    }
                    _ => println!("⚠ No record with id: {}", record_id),
                }
                Ok(())
            }
            Instruction::Modify { caller, record_id, name, byte_count, summary, labels } => {
                self.registry
                    .call(RegistryRequest::ModifyMediaMetadata {
                        caller: Principal::new(caller),
                        record_id,
                        name,
                        byte_count,
                        summary,
                        labels,
                    })
                    .await?;
                println!("✓ Modified record: {}", record_id);
                Ok(())
            }
            Instruction::Transfer { caller, record_id, new_owner } => {
                self.registry
                    .call(RegistryRequest::TransferMediaOwnership {
                        caller: Principal::new(caller),
                        record_id,
                        new_owner: Principal::new(new_owner.clone()),
                    })
                    .await?;
                println!("✓ Transferred record {} to: {}", record_id, new_owner);
                Ok(())
            }
            Instruction::Remove { caller, record_id } => {
                self.registry
                    .call(RegistryRequest::RemoveMediaRecord {
                        caller: Principal::new(caller),
                        record_id,
                    })
                    .await?;
                println!("✓ Removed record: {}", record_id);
                Ok(())
            }
            Instruction::Grant { caller, record_id, principal } => {
                self.registry
                    .call(RegistryRequest::GrantMediaAccess {
                        caller: Principal::new(caller),
                        record_id,
                        principal: Principal::new(principal.clone()),
                    })
                    .await?;
                println!("✓ Granted access on record {} to: {}", record_id, principal);
                Ok(())
            }
            Instruction::Revoke { caller, record_id, principal } => {
                self.registry
                    .call(RegistryRequest::RevokeMediaAccess {
                        caller: Principal::new(caller),
                        record_id,
                        principal: Principal::new(principal.clone()),
                    })
                    .await?;
                println!("✓ Revoked access on record {} from: {}", record_id, principal);
                Ok(())
            }
            Instruction::Check { record_id, principal } => {
                let response = self
                    .registry
                    .call(RegistryRequest::CheckMediaAccess {
                        record_id,
                        principal: Principal::new(principal.clone()),
                    })
                    .await?;
                if let RegistryResponse::Access(granted) = response {
                    println!("✓ Access for {} on record {}: {}", principal, record_id, granted);
                }
                Ok(())
            }
        }
    }
}

impl Default for RegistryHandler {
    fn default() -> Self {
        Self::new()
    }
}
