use super::*;

pub struct App {
    pub config: Config,
    pub backend: SimulatedBackend,
    pub wizard: Option<Wizard>,
    pub wizard_generation: u64,
    pub layout: LayoutState,
    pub path_input: InputState,
    pub keybinds: Keybinds,
    pub focus: usize,
    pub toasts: VecDeque<Toast>,
    pub show_help: bool,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        Self {
            backend: SimulatedBackend::new(config.backend_config()),
            config,
            wizard: None,
            wizard_generation: 0,
            layout: LayoutState::default(),
            path_input: InputState::new(),
            keybinds: Keybinds,
            focus: 0,
            toasts: VecDeque::new(),
            show_help: false,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }

    pub fn current_step(&self) -> Option<Step> {
        self.wizard.as_ref().map(Wizard::current_step)
    }

    pub fn focused_field(&self) -> Option<Field> {
        let wizard = self.wizard.as_ref()?;
        wizard.view().fields().get(self.focus).copied()
    }

    pub fn focused_preference(&self) -> Option<Preference> {
        match self.current_step()? {
            Step::Confirm => Preference::ALL.get(self.focus).copied(),
            _ => None,
        }
    }

    pub(super) fn focus_count(&self) -> usize {
        match self.wizard.as_ref().map(Wizard::view) {
            Some(StepView::Confirm(_)) => Preference::ALL.len(),
            Some(view) => view.fields().len(),
            None => 0,
        }
    }
}
