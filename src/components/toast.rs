use yew::prelude::*;

use crate::timer::{GlooScheduler, Scheduler};

pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
}

/// Arms the auto-dismiss timer. Dropping the handle cancels it.
pub fn schedule_dismiss<S: Scheduler>(scheduler: &S, on_dismiss: Callback<()>) -> S::Handle {
    scheduler.after(TOAST_LIFETIME_MS, Box::new(move || on_dismiss.emit(())))
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    /// Changes on every new notification, restarting the timer even when
    /// the text is the same.
    pub seq: u64,
    pub message: ToastMessage,
    pub on_dismiss: Callback<()>,
}

/// Bottom-right notification that closes itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timer = schedule_dismiss(&GlooScheduler, on_dismiss);
                move || drop(timer)
            },
            props.seq,
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status" aria-live="polite" onclick={dismiss}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 3.5rem;
                        z-index: 60;
                        min-width: 280px;
                        padding: 1rem 1.25rem;
                        background: rgba(12, 14, 12, 0.95);
                        border: 1px solid rgba(var(--primary-rgb), 0.4);
                        border-left: 3px solid rgb(var(--primary-rgb));
                        font-family: var(--font-mono);
                        cursor: pointer;
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-title {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        color: rgb(var(--primary-rgb));
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.8rem;
                        color: rgba(255, 255, 255, 0.75);
                    }
                    @keyframes toastIn {
                        from { transform: translateY(12px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="toast-title">{ props.message.title.clone() }</div>
            <div class="toast-description">{ props.message.description.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let sink = count.clone();
        (count, Callback::from(move |_: ()| sink.set(sink.get() + 1)))
    }

    #[test]
    fn dismisses_after_four_seconds() {
        let scheduler = ManualScheduler::new();
        let (dismissed, on_dismiss) = counter();
        let _timer = schedule_dismiss(&scheduler, on_dismiss);

        scheduler.advance(3_999);
        assert_eq!(dismissed.get(), 0);
        scheduler.advance(1);
        assert_eq!(dismissed.get(), 1);
        scheduler.advance(10_000);
        assert_eq!(dismissed.get(), 1);
    }

    #[test]
    fn dropped_timer_never_fires() {
        let scheduler = ManualScheduler::new();
        let (dismissed, on_dismiss) = counter();
        let timer = schedule_dismiss(&scheduler, on_dismiss);

        scheduler.advance(2_000);
        drop(timer);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5_000);
        assert_eq!(dismissed.get(), 0);
    }

    #[test]
    fn new_notification_restarts_the_lifetime() {
        let scheduler = ManualScheduler::new();
        let (dismissed, on_dismiss) = counter();
        let mut timer = schedule_dismiss(&scheduler, on_dismiss.clone());

        scheduler.advance(3_000);
        // same text again: the old timer is released and a fresh one armed
        drop(timer);
        timer = schedule_dismiss(&scheduler, on_dismiss);
        scheduler.advance(3_999);
        assert_eq!(dismissed.get(), 0);
        scheduler.advance(1);
        assert_eq!(dismissed.get(), 1);
        drop(timer);
    }
}
