//! Label print service
//!
//! Compiles, renders and hands the finished label to a byte sink.

use chrono::NaiveDate;
use shared::InventoryItem;
use tally_printer::{ByteSink, CommandLanguage, render};
use tracing::{error, info, instrument};

use super::catalog::Catalog;
use super::compiler::LabelCompiler;
use crate::core::EdgeResult;

/// Label print service
pub struct LabelPrinter<S> {
    compiler: LabelCompiler,
    language: CommandLanguage,
    sink: S,
}

impl<S: ByteSink> LabelPrinter<S> {
    pub fn new(compiler: LabelCompiler, language: CommandLanguage, sink: S) -> Self {
        Self {
            compiler,
            language,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Print one label; returns the number of bytes sent
    #[instrument(skip(self, item), fields(item_id = %item.identifier))]
    pub async fn print(
        &self,
        item: &InventoryItem,
        quantity: u32,
        date: NaiveDate,
    ) -> EdgeResult<usize> {
        let commands = self.compiler.compile(item, quantity, date)?;
        let data = render(&commands, self.language);

        if let Err(e) = self.sink.send(&data).await {
            error!(error = %e, "Failed to send label");
            return Err(e.into());
        }

        info!(bytes = data.len(), "Label sent");
        Ok(data.len())
    }

    /// Look the item up in the catalog, then print
    pub async fn print_by_id(
        &self,
        catalog: &Catalog,
        identifier: &str,
        quantity: u32,
        date: NaiveDate,
    ) -> EdgeResult<usize> {
        let item = catalog.get(identifier)?;
        self.print(item, quantity, date).await
    }
}
