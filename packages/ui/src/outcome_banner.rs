use dioxus::prelude::*;
use flow::{Notice, NoticeKind};

use crate::icons::{FaCircleCheck, FaCircleExclamation};
use crate::Icon;

/// The single transient message area of a page. Renders nothing when there is
/// no notice; hiding is driven by the flow's timers.
#[component]
pub fn OutcomeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    let (class, role) = match notice.kind {
        NoticeKind::Error => ("outcome outcome-error", "alert"),
        NoticeKind::Success => ("outcome outcome-success", "status"),
    };

    rsx! {
        div { class, role,
            match notice.kind {
                NoticeKind::Error => rsx! {
                    Icon { icon: FaCircleExclamation, width: 14, height: 14 }
                },
                NoticeKind::Success => rsx! {
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                },
            }
            span { "{notice.message}" }
        }
    }
}
