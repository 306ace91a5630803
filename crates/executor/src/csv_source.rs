use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use tracing::{error, info};

use super::error::Error;
use super::types::GraphSource;
use common::types::Edge;
use mcb_core::MultiGraph;

fn default_weight() -> f64 {
    1.0
}

// Helper struct for CSV parsing
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    /// Missing column or empty cell means unit weight.
    #[serde(default = "default_weight", deserialize_with = "weight_or_default")]
    pub weight: f64,
}

fn weight_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let weight: Option<f64> = Option::deserialize(deserializer)?;
    Ok(weight.unwrap_or_else(default_weight))
}

/// Reads an undirected edge list (`from,to[,weight]`) from a CSV file with headers.
///
/// Node ids are dense from zero; the node count is one past the largest id seen.
pub struct CsvSource {
    path: String,
}

impl CsvSource {
    pub fn new(path: String) -> Self {
        CsvSource { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight));
        }
        Ok(edges)
    }
}

#[async_trait::async_trait]
impl GraphSource for CsvSource {
    async fn load_graph(self) -> Result<MultiGraph<f64>, Error> {
        let edges = self.parse_csv_to_edges()?;
        let num_nodes = edges
            .iter()
            .map(|&(from, to, _)| from.max(to) + 1)
            .max()
            .unwrap_or(0);

        info!(
            path = %self.path,
            nodes = num_nodes,
            edges = edges.len(),
            "CsvSource: loaded edge list"
        );

        Ok(MultiGraph::from_weighted_edges(num_nodes, &edges)?)
    }
}
