//! The fixed training narrative.

use super::StatusUpdate;

/// One step of the narrative: a console banner and the update posted after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Line printed to stdout when the phase begins.
    pub banner: &'static str,

    /// Phase label sent as `oumi`.
    pub label: &'static str,

    /// Log line sent as `last_log`.
    pub log: &'static str,
}

impl Phase {
    /// Build a fresh status update for this phase.
    pub fn update(&self) -> StatusUpdate {
        StatusUpdate::new(self.label, self.log)
    }
}

/// Ingesting, training, complete. Always run in this order.
pub const PHASES: [Phase; 3] = [
    Phase {
        banner: "🚀 Oumi: Fetching CodeRabbit Dataset...",
        label: "📥 Ingesting CodeRabbit Logs...",
        log: "Oumi: Loading recent CodeRabbit PR comments for training.",
    },
    Phase {
        // Two spaces after the gear.
        banner: "⚙️  Fine-tuning Llama-3.2 on CodeRabbit patterns...",
        label: "🧠 Training (GRPO)...",
        log: "Oumi: Optimizing agent to predict CodeRabbit suggestions.",
    },
    Phase {
        banner: "✅ Training Complete.",
        label: "✨ TRAINED on CodeRabbit Data",
        log: "Oumi: Model fine-tuned. Accuracy increased by 15%.",
    },
];
