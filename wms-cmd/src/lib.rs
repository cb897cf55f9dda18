//! Command implementations for the WMS CLI.
//!
//! Subcommands browse the region → city → sensor hierarchy, print a
//! sensor's recent history, request a fullness prediction, and emit the
//! region heatmap as GeoJSON.

use clap::Subcommand;
use wms_api::client::ApiClient;
use wms_api::config::Config;
use wms_state::detail::DEFAULT_RECORD_LIMIT;

pub mod analytics;
pub mod browse;
pub mod sensor;

#[derive(Subcommand)]
pub enum Command {
    /// List all regions
    Regions,

    /// List the cities of one region
    Cities {
        /// Region id
        #[arg(short = 'r', long)]
        region_id: i64,
    },

    /// List the sensors of one city
    Sensors {
        /// City id
        #[arg(short = 'c', long)]
        city_id: i64,
    },

    /// Print the most recent readings of one sensor
    Records {
        /// Sensor id
        #[arg(short = 's', long)]
        sensor_id: i64,

        /// How many readings to fetch
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_LIMIT)]
        limit: usize,
    },

    /// Request a fullness prediction for one sensor
    Predict {
        /// Sensor id
        #[arg(short = 's', long)]
        sensor_id: i64,
    },

    /// Emit a region's heatmap feature collection as GeoJSON on stdout
    Heatmap {
        /// Region id
        #[arg(short = 'r', long)]
        region_id: i64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let client = ApiClient::new(&config);

    match command {
        Command::Regions => browse::list_regions(&client).await,
        Command::Cities { region_id } => browse::list_cities(&client, region_id).await,
        Command::Sensors { city_id } => browse::list_sensors(&client, city_id).await,
        Command::Records { sensor_id, limit } => {
            sensor::show_records(&client, sensor_id, limit).await
        }
        Command::Predict { sensor_id } => sensor::show_prediction(&client, sensor_id).await,
        Command::Heatmap { region_id } => analytics::print_heatmap(&client, region_id).await,
    }
}
