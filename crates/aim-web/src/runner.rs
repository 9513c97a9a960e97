use aim_engine::{AimFrame, AimSession, InputEvent, InputQueue, InteractionConfig, TableConfig};

/// Owns the session and the frame the renderer reads.
///
/// The bridge keeps one runner in `thread_local!` storage and forwards
/// browser events to it as free `#[wasm_bindgen]` functions.
pub struct AimRunner {
    session: AimSession,
    input: InputQueue,
    frame: AimFrame,
}

impl AimRunner {
    pub fn new(table: TableConfig, interaction: InteractionConfig) -> Self {
        let session = AimSession::with_config(table, interaction);
        let frame = AimFrame::capture(&session);
        Self {
            session,
            input: InputQueue::new(),
            frame,
        }
    }

    pub fn session(&self) -> &AimSession {
        &self.session
    }

    /// Queue an event without applying it yet.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply every queued event in order, then rebuild the frame.
    pub fn flush(&mut self) {
        self.session.process(&mut self.input);
        self.frame = AimFrame::capture(&self.session);
    }

    /// Queue and apply one event right away.
    pub fn dispatch(&mut self, event: InputEvent) {
        self.push_input(event);
        self.flush();
    }

    pub fn frame(&self) -> &AimFrame {
        &self.frame
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn frame_ptr(&self) -> *const f64 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        AimFrame::FLOATS as u32
    }

    pub fn table_config(&self) -> &TableConfig {
        self.session.table().config()
    }
}

impl Default for AimRunner {
    fn default() -> Self {
        Self::new(TableConfig::default(), InteractionConfig::default())
    }
}
