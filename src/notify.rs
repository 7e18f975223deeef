use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn missing_field_on_advance() -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: "Campo obrigatório",
            description: "Por favor, preencha o campo antes de continuar.",
        }
    }

    pub fn missing_field_on_submit() -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: "Campo obrigatório",
            description: "Por favor, preencha o campo antes de enviar.",
        }
    }

    pub fn submitted() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Formulário enviado!",
            description: "Suas informações foram registradas com sucesso.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Live toasts, oldest first. Ids never repeat within one stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u64),
}

// Reducer so timer callbacks never act on a stale snapshot.
impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(n) => {
                next.push(n);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub stack: ToastStack,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    if props.stack.is_empty() {
        return html! {};
    }

    html! {
        <div class="toasts" role="region" aria-live="polite">
            { for props.stack.iter().map(|t| html! {
                <ToastItem key={t.id} toast={t.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let n = &props.toast.notification;
    let variant = match n.kind {
        NotificationKind::Warning => "toast destructive",
        NotificationKind::Success => "toast",
    };

    html! {
        <div class={variant} role="status">
            <div class="toast-body">
                <div class="toast-title">{ n.title }</div>
                <div class="toast-desc">{ n.description }</div>
            </div>
            <button type="button" class="toast-close" aria-label="Fechar" onclick={on_close}>{ "×" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut s = ToastStack::default();
        let a = s.push(Notification::submitted());
        let b = s.push(Notification::missing_field_on_advance());
        assert!(b > a);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut s = ToastStack::default();
        let a = s.push(Notification::submitted());
        let b = s.push(Notification::missing_field_on_submit());
        s.dismiss(a);
        assert_eq!(s.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
        s.dismiss(a);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut s = ToastStack::default();
        let first = s.push(Notification::submitted());
        for _ in 0..MAX_TOASTS {
            s.push(Notification::missing_field_on_advance());
        }
        assert_eq!(s.len(), MAX_TOASTS);
        assert!(s.iter().all(|t| t.id != first));
    }

    #[test]
    fn reducer_applies_push_then_dismiss() {
        let s = Rc::new(ToastStack::default());
        let s = s.reduce(ToastAction::Push(Notification::submitted()));
        let id = s.iter().next().map(|t| t.id).unwrap();
        let s = s.reduce(ToastAction::Dismiss(id));
        assert!(s.is_empty());
    }

    #[test]
    fn warning_wording_differs_by_action() {
        let a = Notification::missing_field_on_advance();
        let b = Notification::missing_field_on_submit();
        assert_eq!(a.title, b.title);
        assert_ne!(a.description, b.description);
        assert_eq!(a.kind, NotificationKind::Warning);
        assert_eq!(Notification::submitted().kind, NotificationKind::Success);
    }
}
