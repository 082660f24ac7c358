//! Long-press button control.
//!
//! The button owns no timing logic of its own. It reacts to the detector's
//! notifications by firing control events, retargeting the progress bar and
//! the touch-down scale, and re-resolving its title.

use crate::config::LongPressButtonConfig;
use crate::control_event::ControlEvent;
use crate::state_table::{ControlState, StateTable};
use longpress_animation::{AnimationSpec, Easing, ProgressAnimator, Tween};
use longpress_core::RuntimeHandle;
use longpress_foundation::{
    PointerEvent, PointerEventKind, PressDetector, PressEvent, PressPhase, PressSnapshot,
};
use longpress_ui_graphics::{Color, TextAttributes};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_time::Duration;

type TargetHandler = Rc<dyn Fn(ControlEvent)>;

/// Everything a renderer needs to paint the button for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonRenderState {
    pub title: String,
    pub title_attributes: Option<TextAttributes>,
    pub background: Option<Color>,
    pub progress_color: Option<Color>,
    /// Presented progress in `[0, 1]`; the filled fraction of the width.
    pub progress: f32,
    pub scale: f32,
    pub enabled: bool,
}

struct ButtonState {
    runtime: RuntimeHandle,
    detector: PressDetector,
    config: LongPressButtonConfig,
    enabled: bool,
    progress: ProgressAnimator,
    scale: Tween<f32>,
    titles: StateTable<String>,
    testing_title: Option<String>,
    recognized_title: Option<String>,
    text_attributes: StateTable<TextAttributes>,
    background_colors: StateTable<Color>,
    title: String,
    title_attributes: Option<TextAttributes>,
    background: Option<Color>,
    targets: SmallVec<[(ControlEvent, TargetHandler); 4]>,
}

impl ButtonState {
    fn on_press_event(&mut self, event: PressEvent, snapshot: &PressSnapshot) -> ControlEvent {
        let required = snapshot.config.required_press_duration;
        let control_event = match event {
            PressEvent::Began => {
                self.touched_down();
                ControlEvent::TouchDown
            }
            PressEvent::TestingStarted => {
                self.progress
                    .set_progress(1.0, required, Duration::ZERO, true);
                ControlEvent::ValueChanged
            }
            PressEvent::Recognized => {
                self.touched_up();
                ControlEvent::PrimaryActionTriggered
            }
            PressEvent::Cancelled => {
                self.touched_up();
                if snapshot.previous_phase == PressPhase::Testing {
                    self.progress
                        .set_progress(0.0, required, Duration::ZERO, true);
                } else {
                    self.progress.snap_to(0.0);
                }
                ControlEvent::TouchCancel
            }
            PressEvent::Failed => {
                self.touched_up();
                self.progress.snap_to(0.0);
                ControlEvent::TouchCancel
            }
        };
        self.update_title_text();
        log::debug!("long-press button {event:?} -> {control_event:?}");
        control_event
    }

    fn handlers_for(&self, event: ControlEvent) -> SmallVec<[TargetHandler; 4]> {
        self.targets
            .iter()
            .filter(|(target_event, _)| *target_event == event)
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    }

    fn touched_down(&mut self) {
        let (scale, duration) = (self.config.touch_down_scale, self.config.touch_down_duration);
        self.animate_scale(scale, duration);
    }

    fn touched_up(&mut self) {
        let duration = self.config.touch_up_duration;
        self.animate_scale(1.0, duration);
    }

    fn animate_scale(&mut self, target: f32, duration: Duration) {
        let now = self.runtime.now();
        let from = self.scale.value_at(now);
        self.scale = Tween::new(
            from,
            target,
            now,
            AnimationSpec::tween(duration, Easing::EaseInOut),
        );
    }

    fn title_for_current_state(&self) -> String {
        if !self.enabled {
            if let Some(title) = self.titles.get(ControlState::Disabled) {
                return title.clone();
            }
        }
        if self.detector.phase() == PressPhase::Recognized {
            if let Some(title) = &self.recognized_title {
                return title.clone();
            }
        }
        if self.detector.is_testing() {
            if let Some(title) = &self.testing_title {
                return title.clone();
            }
        }
        self.titles
            .get(ControlState::Normal)
            .cloned()
            .unwrap_or_default()
    }

    fn update_title_text(&mut self) {
        self.title = self.title_for_current_state();
    }

    fn update_title_appearance(&mut self) {
        self.title_attributes = self.text_attributes.resolve(self.enabled).cloned();
    }

    fn update_background_color(&mut self) {
        self.background = self.background_colors.resolve(self.enabled).copied();
    }

    fn update_all(&mut self) {
        self.update_title_text();
        self.update_title_appearance();
        self.update_background_color();
    }
}

/// A button that fires its primary action only after being held.
///
/// A touch that lifts before `minimum_press_duration` is a plain tap and is
/// cancelled. Holding past it starts filling the progress bar over
/// `required_press_duration`; lifting during that time drains the bar and
/// cancels, holding to the end triggers the primary action.
///
/// Pointer events go in through [`handle_pointer`](Self::handle_pointer); time
/// moves when the host advances the shared [`RuntimeHandle`].
pub struct LongPressButton {
    detector: PressDetector,
    state: Rc<RefCell<ButtonState>>,
}

impl LongPressButton {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self::with_config(runtime, LongPressButtonConfig::default())
    }

    pub fn with_config(runtime: RuntimeHandle, config: LongPressButtonConfig) -> Self {
        let detector = PressDetector::new(runtime.clone(), config.press_config());
        let state = Rc::new(RefCell::new(ButtonState {
            progress: ProgressAnimator::new(runtime.clone()),
            scale: Tween::settled(1.0, runtime.now()),
            runtime,
            detector: detector.clone(),
            config,
            enabled: true,
            titles: StateTable::new(),
            testing_title: None,
            recognized_title: None,
            text_attributes: StateTable::new(),
            background_colors: StateTable::new(),
            title: String::new(),
            title_attributes: None,
            background: None,
            targets: SmallVec::new(),
        }));

        let weak = Rc::downgrade(&state);
        detector.set_listener(move |event, snapshot| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let (control_event, handlers) = {
                let mut state = state.borrow_mut();
                let control_event = state.on_press_event(event, snapshot);
                (control_event, state.handlers_for(control_event))
            };
            for handler in handlers {
                handler(control_event);
            }
        });

        state.borrow_mut().update_all();
        Self { detector, state }
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.state.borrow().runtime.clone()
    }

    pub fn detector(&self) -> &PressDetector {
        &self.detector
    }

    pub fn phase(&self) -> PressPhase {
        self.detector.phase()
    }

    pub fn is_testing(&self) -> bool {
        self.detector.is_testing()
    }

    /// Progress as currently presented, sampled at the runtime's time.
    pub fn presented_progress(&self) -> f32 {
        self.state.borrow().progress.presented_value()
    }

    /// Progress the bar is heading to.
    pub fn progress(&self) -> f32 {
        self.state.borrow().progress.progress()
    }

    pub fn is_progress_animating(&self) -> bool {
        self.state.borrow().progress.is_animating()
    }

    /// Feeds a pointer event to the button. Returns `false` if the button is
    /// disabled and ignored it.
    pub fn handle_pointer(&self, event: &PointerEvent) -> bool {
        if !self.state.borrow().enabled {
            log::trace!("disabled long-press button ignored {:?}", event.kind);
            return false;
        }
        if event.kind == PointerEventKind::Down && self.detector.phase().is_terminal() {
            self.detector.reset();
            let mut state = self.state.borrow_mut();
            state.progress.snap_to(0.0);
            state.update_title_text();
        }
        self.detector.handle_pointer(event);
        true
    }

    pub fn add_target(&self, event: ControlEvent, handler: impl Fn(ControlEvent) + 'static) {
        let handler: TargetHandler = Rc::new(handler);
        self.state.borrow_mut().targets.push((event, handler));
    }

    pub fn remove_targets(&self, event: ControlEvent) {
        self.state
            .borrow_mut()
            .targets
            .retain(|(target_event, _)| *target_event != event);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    /// Enables or disables the button and refreshes its title, title
    /// attributes and background. Disabling during a press abandons it
    /// without notifying targets.
    pub fn set_enabled(&self, enabled: bool) {
        let interrupted = !enabled && self.detector.phase().is_active();
        if interrupted {
            self.detector.reset();
        }
        let mut state = self.state.borrow_mut();
        if state.enabled != enabled {
            log::debug!("long-press button enabled: {enabled}");
        }
        state.enabled = enabled;
        if interrupted {
            state.progress.snap_to(0.0);
            state.touched_up();
        }
        state.update_all();
    }

    /// Title for a control state. Supported states are `Normal` and `Disabled`.
    pub fn set_title_for_state(&self, title: Option<&str>, state: ControlState) {
        let mut button = self.state.borrow_mut();
        button.titles.set(state, title.map(str::to_owned));
        button.update_title_text();
    }

    /// Title shown for an event phase. Supported events are `ValueChanged`
    /// (while the bar fills) and `PrimaryActionTriggered` (after recognition).
    pub fn set_title_for_event(&self, title: Option<&str>, event: ControlEvent) {
        let mut button = self.state.borrow_mut();
        let title = title.map(str::to_owned);
        match event {
            ControlEvent::ValueChanged => button.testing_title = title,
            ControlEvent::PrimaryActionTriggered => button.recognized_title = title,
            other => {
                log::warn!("titles are not supported for {other:?}");
                return;
            }
        }
        button.update_title_text();
    }

    pub fn set_title_text_attributes(&self, attributes: Option<TextAttributes>, state: ControlState) {
        let mut button = self.state.borrow_mut();
        button.text_attributes.set(state, attributes);
        button.update_title_appearance();
    }

    pub fn set_background_color(&self, color: Option<Color>, state: ControlState) {
        let mut button = self.state.borrow_mut();
        button.background_colors.set(state, color);
        button.update_background_color();
    }

    pub fn set_progress_color(&self, color: Option<Color>) {
        self.state.borrow_mut().config.progress_color = color;
    }

    pub fn set_minimum_press_duration(&self, duration: Duration) {
        self.state.borrow_mut().config.minimum_press_duration = duration;
        self.detector.set_minimum_press_duration(duration);
    }

    pub fn set_required_press_duration(&self, duration: Duration) {
        self.state.borrow_mut().config.required_press_duration = duration;
        self.detector.set_required_press_duration(duration);
    }

    pub fn set_touch_down_scale(&self, scale: f32) {
        self.state.borrow_mut().config.touch_down_scale = scale;
    }

    pub fn set_touch_durations(&self, down: Duration, up: Duration) {
        let mut state = self.state.borrow_mut();
        state.config.touch_down_duration = down;
        state.config.touch_up_duration = up;
    }

    pub fn config(&self) -> LongPressButtonConfig {
        self.state.borrow().config.clone()
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn render_state(&self) -> ButtonRenderState {
        let state = self.state.borrow();
        let now = state.runtime.now();
        ButtonRenderState {
            title: state.title.clone(),
            title_attributes: state.title_attributes.clone(),
            background: state.background,
            progress_color: state.config.progress_color,
            progress: state.progress.presented_value_at(now),
            scale: state.scale.value_at(now),
            enabled: state.enabled,
        }
    }
}

#[cfg(test)]
#[path = "tests/button_tests.rs"]
mod tests;
