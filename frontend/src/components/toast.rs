use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

/// Handed out through context so any component can raise a toast.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.dispatcher.dispatch(ToastAction::Push(ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatcher.dispatch(ToastAction::Push(ToastKind::Error, message.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = ToastHandle {
        dispatcher: list.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                { for list.toasts().iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || on_dismiss.emit(id));
                // Dropping the timeout on unmount cancels it.
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    html! {
        <div {class} role="status" {onclick}>
            { &props.toast.message }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_keep_increasing_after_dismissal() {
        let mut list = ToastList::default();
        let first = list.push(ToastKind::Success, "Saved".to_string());
        list.dismiss(first);
        let second = list.push(ToastKind::Error, "Failed".to_string());

        assert!(second > first);
        assert_eq!(list.toasts().len(), 1);
        assert_eq!(list.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let mut list = ToastList::default();
        list.push(ToastKind::Success, "Saved".to_string());
        list.dismiss(42);
        assert_eq!(list.toasts().len(), 1);
    }

    #[test]
    fn reducer_applies_push_and_dismiss() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(ToastKind::Success, "Thanks".to_string()));
        assert_eq!(list.toasts()[0].message, "Thanks");
        let id = list.toasts()[0].id;
        let list = list.reduce(ToastAction::Dismiss(id));
        assert!(list.toasts().is_empty());
    }
}
