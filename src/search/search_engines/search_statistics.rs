use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of states expanded
    expanded_nodes: usize,
    /// Number of successor states generated
    generated_nodes: usize,
    /// Number of popped states pruned as dominated
    dominated_nodes: usize,
    /// Number of states re-expanded after a cost improvement
    reopened_nodes: usize,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            dominated_nodes: 0,
            reopened_nodes: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_dominated_nodes(&mut self) {
        self.dominated_nodes += 1;
        self.log_if_needed();
    }

    pub fn record_reopened_nodes(&mut self, num_nodes: usize) {
        self.reopened_nodes = num_nodes;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn dominated_nodes(&self) -> usize {
        self.dominated_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            dominated_nodes = self.dominated_nodes,
            reopened_nodes = self.reopened_nodes,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
