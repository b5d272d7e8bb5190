//! Display adapter over the aggregator. Formats results as console lines and
//! holds no logic of its own; errors from below propagate unchanged.

use crate::aggregator::Aggregator;
use crate::console::Console;
use crate::error::Result;
use crate::model::Record;
use crate::remote::RemoteApi;
use crate::store::RecordStore;

pub struct Presenter<S: RecordStore, R: RemoteApi, C: Console> {
    aggregator: Aggregator<S, R>,
    console: C,
}

impl<S: RecordStore, R: RemoteApi, C: Console> Presenter<S, R, C> {
    pub fn new(aggregator: Aggregator<S, R>, console: C) -> Self {
        Self { aggregator, console }
    }

    /// One line with the combined count summary.
    pub fn show_summary(&self) -> Result<()> {
        let result = self.aggregator.combine()?;
        self.console.line(&format!("Summary: {}", result.summary));
        Ok(())
    }

    /// One line listing all combined records.
    pub fn show_combined(&self) -> Result<()> {
        let result = self.aggregator.combine()?;
        self.console
            .line(&format!("Combined Data: {:?}", result.combined));
        Ok(())
    }

    /// Synchronize with the remote and show its acknowledgement.
    pub fn show_sync(&self) -> Result<()> {
        let response = self.aggregator.synchronize()?;
        self.console.line(&format!("Sync Response: {}", response));
        Ok(())
    }

    /// Update a record locally and remotely, then show both outcomes.
    pub fn show_update(&mut self, index: usize, record: Record) -> Result<()> {
        let result = self.aggregator.update_both(index, record)?;
        self.console
            .line(&format!("Updated Local Data: {:?}", result.local));
        self.console
            .line(&format!("Remote Update Response: {}", result.remote));
        Ok(())
    }

    pub fn aggregator_mut(&mut self) -> &mut Aggregator<S, R> {
        &mut self.aggregator
    }
}
