use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use care_cost_core::{CostInputs, FieldId, FormSnapshot, RawFields, RoomSelection};

#[derive(Parser, Debug)]
#[command(name = "care-cost", version, about = "Compare current living costs with a care facility plan")]
pub struct Cli {
    /// Facility configuration file (JSON); reference catalogs when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare current costs with the selected facility plan
    Compare {
        #[command(flatten)]
        form: FormArgs,

        /// Print the raw result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List configured room tiers and add-on fees
    Rooms,

    /// Write a date-stamped JSON summary of the comparison
    Export {
        #[command(flatten)]
        form: FormArgs,

        /// Directory to write the summary into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Check an exported summary against the current configuration
    Verify {
        /// Path to the exported summary
        file: PathBuf,
    },
}

/// Form values, given as raw text exactly as typed
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Monthly housing payment
    #[arg(long)]
    pub housing: Option<String>,

    /// Annual property tax
    #[arg(long)]
    pub tax: Option<String>,

    /// Monthly utilities
    #[arg(long)]
    pub utilities: Option<String>,

    /// Monthly cleaning fee
    #[arg(long)]
    pub cleaning: Option<String>,

    /// Monthly transportation and other fees
    #[arg(long)]
    pub others: Option<String>,

    /// Monthly electricity
    #[arg(long)]
    pub electricity: Option<String>,

    /// Monthly activities fee (extended form)
    #[arg(long)]
    pub activities: Option<String>,

    /// Monthly smart-care fee (extended form)
    #[arg(long)]
    pub smart_care: Option<String>,

    /// Room tier id or nominal monthly rent
    #[arg(short, long)]
    pub room: Option<String>,

    /// Enable an add-on fee by id (repeatable)
    #[arg(short, long = "add-on")]
    pub add_ons: Vec<String>,
}

impl FormArgs {
    pub fn raw_fields(&self) -> RawFields {
        let mut raw = RawFields::new();
        let values = [
            (FieldId::Housing, &self.housing),
            (FieldId::Tax, &self.tax),
            (FieldId::Utilities, &self.utilities),
            (FieldId::Cleaning, &self.cleaning),
            (FieldId::Others, &self.others),
            (FieldId::Electricity, &self.electricity),
            (FieldId::Activities, &self.activities),
            (FieldId::SmartCare, &self.smart_care),
        ];
        for (field, value) in values.into_iter().filter_map(|(f, v)| v.as_ref().map(|v| (f, v))) {
            raw.set(field, value.clone());
        }
        raw
    }

    pub fn room_selection(&self) -> RoomSelection {
        self.room
            .as_deref()
            .map(RoomSelection::parse)
            .unwrap_or_default()
    }

    pub fn form_snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new(CostInputs::from_raw(&self.raw_fields())).with_room(self.room_selection());
        snapshot.add_ons.extend(self.add_ons.iter().cloned());
        snapshot
    }
}
