//! Requester-side request authoring, including the debounced category
//! suggestion trigger.

use std::time::Duration;

use crate::engine::{App, Command, Notification};
use crate::models::{MAX_REQUEST_IMAGES, Request};
use crate::services::classify;

/// Input must exceed this many characters before analysis runs.
pub const MIN_ANALYZABLE_CHARS: usize = 5;
/// Pause after the last qualifying edit before a suggestion appears.
pub const AUTO_SUGGEST_DELAY: Duration = Duration::from_millis(3000);
/// Shorter pause for an explicit regenerate of the current text.
pub const REGENERATE_DELAY: Duration = Duration::from_millis(1500);

pub struct PublishRequestApp;

#[derive(Debug, Clone)]
pub enum Msg {
    DescriptionChanged(String),
    SuggestionDue,
    Regenerate,
    RegenerateDue,
    ApplySuggestion,
    SelectTimeSlot(String),
    ToggleCategory(String),
    AddImage,
    RemoveImage(usize),
    Publish,
}

#[derive(Debug, Default)]
pub struct State {
    pub description: String,
    pub time_slot: Option<String>,
    pub selected_categories: Vec<String>,
    pub images: Vec<String>,
    /// True from a qualifying edit until the suggestion lands.
    pub analyzing: bool,
    pub suggestion: Option<Vec<String>>,
    published: Option<Request>,
}

impl State {
    pub fn can_publish(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn published(&self) -> Option<&Request> {
        self.published.as_ref()
    }

    fn qualifies_for_analysis(&self) -> bool {
        self.description.chars().count() > MIN_ANALYZABLE_CHARS
    }
}

impl App for PublishRequestApp {
    type State = State;
    type Msg = Msg;
    type InitParams = ();

    fn init(_params: ()) -> (State, Command<Msg>) {
        (State::default(), Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::DescriptionChanged(text) => {
                state.description = text;
                state.suggestion = None;
                if !state.qualifies_for_analysis() {
                    state.analyzing = false;
                    return Command::CancelDebounce;
                }
                // Restarting the timer keeps the analyzing indicator up across
                // a burst of edits; only the last pause produces a suggestion.
                state.analyzing = true;
                Command::Debounce {
                    delay: AUTO_SUGGEST_DELAY,
                    msg: Msg::SuggestionDue,
                }
            }
            Msg::SuggestionDue => {
                state.analyzing = false;
                let categories = classify::suggest(&state.description);
                state.suggestion = Some(categories.clone());
                Command::Notify(Notification::SuggestionReady { categories })
            }
            Msg::Regenerate => {
                // Only reachable from a visible suggestion.
                if state.suggestion.is_none() {
                    return Command::None;
                }
                state.suggestion = None;
                state.analyzing = true;
                Command::Debounce {
                    delay: REGENERATE_DELAY,
                    msg: Msg::RegenerateDue,
                }
            }
            Msg::RegenerateDue => {
                state.analyzing = false;
                // Same classification, reversed: visible feedback that a
                // fresh pass ran even when the result is identical.
                let mut categories = classify::suggest(&state.description);
                categories.reverse();
                state.suggestion = Some(categories.clone());
                Command::Notify(Notification::SuggestionReady { categories })
            }
            Msg::ApplySuggestion => {
                // Wholesale replacement of the selected set.
                if let Some(suggestion) = state.suggestion.take() {
                    state.selected_categories = suggestion;
                }
                Command::None
            }
            Msg::SelectTimeSlot(slot) => {
                state.time_slot = Some(slot);
                Command::None
            }
            Msg::ToggleCategory(category) => {
                if let Some(index) = state
                    .selected_categories
                    .iter()
                    .position(|selected| selected == &category)
                {
                    state.selected_categories.remove(index);
                } else {
                    state.selected_categories.push(category);
                }
                Command::None
            }
            Msg::AddImage => {
                if state.images.len() < MAX_REQUEST_IMAGES {
                    let seq = state.images.len() + 100;
                    state
                        .images
                        .push(format!("https://picsum.photos/200/200?random={seq}"));
                }
                Command::None
            }
            Msg::RemoveImage(index) => {
                if index < state.images.len() {
                    state.images.remove(index);
                }
                Command::None
            }
            Msg::Publish => {
                // An empty description disables publishing at the boundary.
                if !state.can_publish() {
                    return Command::None;
                }
                let mut request = Request::new(state.description.clone());
                request.categories = state.selected_categories.clone();
                request.time_slot = state.time_slot.clone();
                request.images = state.images.clone();
                request.publish();
                log::info!("published request {}", request.id);
                state.published = Some(request);
                Command::None
            }
        }
    }

    fn title() -> &'static str {
        "发布需求"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Runtime;
    use crate::models::RequestStatus;

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        PublishRequestApp::update(state, msg)
    }

    #[test]
    fn test_short_input_suppresses_analysis() {
        let mut state = State::default();
        let cmd = update(&mut state, Msg::DescriptionChanged("修水管".to_string()));
        assert!(matches!(cmd, Command::CancelDebounce));
        assert!(!state.analyzing);
        assert!(state.suggestion.is_none());
    }

    #[test]
    fn test_qualifying_input_starts_debounce() {
        let mut state = State::default();
        let cmd = update(
            &mut state,
            Msg::DescriptionChanged("厨房水龙头漏水严重".to_string()),
        );
        assert!(state.analyzing);
        match cmd {
            Command::Debounce { delay, .. } => assert_eq!(delay, AUTO_SUGGEST_DELAY),
            _ => panic!("expected a debounce command"),
        }
    }

    #[test]
    fn test_shrinking_input_clears_pending_suggestion() {
        let mut state = State::default();
        update(
            &mut state,
            Msg::DescriptionChanged("厨房水龙头漏水严重".to_string()),
        );
        update(&mut state, Msg::SuggestionDue);
        assert!(state.suggestion.is_some());

        let cmd = update(&mut state, Msg::DescriptionChanged("漏水".to_string()));
        assert!(matches!(cmd, Command::CancelDebounce));
        assert!(state.suggestion.is_none());
        assert!(!state.analyzing);
    }

    #[test]
    fn test_apply_replaces_selection_wholesale() {
        let mut state = State::default();
        state.selected_categories = vec!["搬家拉货".to_string()];
        update(
            &mut state,
            Msg::DescriptionChanged("厨房水龙头漏水严重".to_string()),
        );
        update(&mut state, Msg::SuggestionDue);
        update(&mut state, Msg::ApplySuggestion);

        assert_eq!(state.selected_categories, vec!["家庭维修", "水电急修"]);
        assert!(state.suggestion.is_none());
    }

    #[test]
    fn test_toggle_category_adds_then_removes() {
        let mut state = State::default();
        update(&mut state, Msg::ToggleCategory("宠物服务".to_string()));
        assert_eq!(state.selected_categories, vec!["宠物服务"]);
        update(&mut state, Msg::ToggleCategory("宠物服务".to_string()));
        assert!(state.selected_categories.is_empty());
    }

    #[test]
    fn test_images_capped_at_three() {
        let mut state = State::default();
        for _ in 0..5 {
            update(&mut state, Msg::AddImage);
        }
        assert_eq!(state.images.len(), MAX_REQUEST_IMAGES);

        update(&mut state, Msg::RemoveImage(1));
        assert_eq!(state.images.len(), 2);
        // Out-of-range removal is a no-op.
        update(&mut state, Msg::RemoveImage(9));
        assert_eq!(state.images.len(), 2);
    }

    #[test]
    fn test_publish_blocked_without_description() {
        let mut state = State::default();
        update(&mut state, Msg::Publish);
        assert!(state.published().is_none());
    }

    #[test]
    fn test_publish_produces_matching_request() {
        let mut state = State::default();
        update(
            &mut state,
            Msg::DescriptionChanged("家里大扫除，需要擦玻璃".to_string()),
        );
        update(&mut state, Msg::SelectTimeSlot("明天 上午".to_string()));
        update(&mut state, Msg::Publish);

        let request = state.published().expect("request should be published");
        assert_eq!(request.status, RequestStatus::Matching);
        assert_eq!(request.time_slot.as_deref(), Some("明天 上午"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_burst_yields_one_suggestion_after_last_pause() {
        let mut runtime = Runtime::<PublishRequestApp>::new(());

        for text in ["厨房水龙头漏", "厨房水龙头漏水", "厨房水龙头漏水严重"] {
            runtime.dispatch(Msg::DescriptionChanged(text.to_string()));
            tokio::task::yield_now().await;
            tokio::time::advance(Duration::from_millis(1000)).await;
        }

        // 1000ms have already passed since the last keystroke; just before
        // the 3000ms mark nothing has fired.
        tokio::time::advance(Duration::from_millis(1999)).await;
        runtime.settle(Duration::ZERO).await;
        assert!(runtime.state().analyzing);
        assert!(runtime.state().suggestion.is_none());

        tokio::time::advance(Duration::from_millis(1)).await;
        runtime.settle(Duration::from_millis(10)).await;

        assert!(!runtime.state().analyzing);
        assert_eq!(
            runtime.state().suggestion.as_deref(),
            Some(&["家庭维修".to_string(), "水电急修".to_string()][..])
        );
        assert_eq!(
            runtime.notifications(),
            &[Notification::SuggestionReady {
                categories: vec!["家庭维修".to_string(), "水电急修".to_string()],
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_timer_output_does_not_double_fire() {
        let mut runtime = Runtime::<PublishRequestApp>::new(());
        runtime.dispatch(Msg::DescriptionChanged("厨房水龙头漏水严重".to_string()));
        tokio::task::yield_now().await;

        // The first timer elapses and queues its message, but a new
        // qualifying edit lands before the queue is processed. The stale
        // output must not surface as an extra suggestion.
        tokio::time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        runtime.dispatch(Msg::DescriptionChanged("帮我取三个大件包裹".to_string()));
        tokio::task::yield_now().await;

        runtime.settle(Duration::from_millis(3100)).await;
        assert_eq!(
            runtime.state().suggestion.as_deref(),
            Some(&["跑腿代办".to_string(), "同城急送".to_string()][..])
        );
        assert_eq!(
            runtime.notifications(),
            &[Notification::SuggestionReady {
                categories: vec!["跑腿代办".to_string(), "同城急送".to_string()],
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_regenerate_reverses_through_short_path() {
        let mut runtime = Runtime::<PublishRequestApp>::new(());
        runtime.dispatch(Msg::DescriptionChanged("厨房水龙头漏水严重".to_string()));
        tokio::task::yield_now().await;
        runtime.settle(Duration::from_millis(3100)).await;
        assert_eq!(
            runtime.state().suggestion.as_deref(),
            Some(&["家庭维修".to_string(), "水电急修".to_string()][..])
        );

        runtime.dispatch(Msg::Regenerate);
        tokio::task::yield_now().await;
        assert!(runtime.state().analyzing);

        // The regenerate pass uses the 1500ms path, not the 3000ms one.
        tokio::time::advance(REGENERATE_DELAY).await;
        runtime.settle(Duration::from_millis(10)).await;
        assert_eq!(
            runtime.state().suggestion.as_deref(),
            Some(&["水电急修".to_string(), "家庭维修".to_string()][..])
        );
    }
}
