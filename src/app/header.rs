use std::time::Duration;

use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_use::{use_media_query, use_window_scroll};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::{PERSONAL_INFO, PROJECTS};
use crate::nav::{is_scrolled, NavMenu, Section, MOBILE_MAX_WIDTH, SUBMENU_RESTORE_MS};

/// Smooth-scroll the element with `id` into view, if it exists.
pub fn scroll_to_id(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        log::debug!("no element #{id} to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn project_anchor(id: u32) -> String {
    format!("project-{id}")
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(NavMenu::new(PROJECTS.first().map(|p| p.id)));
    let (_, scroll_y) = use_window_scroll();
    let is_mobile = use_media_query(format!("(max-width: {MOBILE_MAX_WIDTH}px)"));
    let restore = StoredValue::new(None::<TimeoutHandle>);

    Effect::watch(
        move || is_mobile.get(),
        move |mobile, _, _| menu.update(|m| m.viewport_changed(*mobile)),
        false,
    );

    let cancel_restore = move || {
        if let Some(handle) = restore.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };
    let schedule_restore = move || {
        cancel_restore();
        match set_timeout_with_handle(
            move || menu.update(|m| m.restore_default_project()),
            Duration::from_millis(SUBMENU_RESTORE_MS),
        ) {
            Ok(handle) => restore.set_value(Some(handle)),
            Err(err) => log::debug!("couldn't schedule submenu restore: {err:?}"),
        }
    };
    on_cleanup(cancel_restore);

    let go = move |ev: MouseEvent, section: Section| {
        ev.prevent_default();
        let section = menu.try_update(|m| m.navigate(section)).unwrap_or(section);
        scroll_to_id(section.id());
    };

    let header_class = move || {
        if is_scrolled(scroll_y.get()) {
            "scrolled fixed inset-x-0 top-0 z-50 border-b border-white/10 bg-black/80 backdrop-blur transition-colors duration-300"
        } else {
            "fixed inset-x-0 top-0 z-50 bg-transparent transition-colors duration-300"
        }
    };
    let links_class = move || {
        let base = "flex-col lg:flex lg:flex-row lg:items-center gap-6 absolute lg:static top-full inset-x-0 bg-black/95 lg:bg-transparent px-6 py-6 lg:p-0";
        if menu.with(|m| m.open) {
            format!("flex {base}")
        } else {
            format!("hidden {base}")
        }
    };

    let projects_menu = move || {
        let project_links = PROJECTS
            .iter()
            .map(|project| {
                let id = project.id;
                let class = move || {
                    if menu.with(|m| m.active_project == Some(id)) {
                        "block px-4 py-2 text-teal-300 bg-white/5"
                    } else {
                        "block px-4 py-2 text-white/70 hover:text-white"
                    }
                };
                view! {
                    <li>
                        <a
                            href=format!("#{}", project_anchor(id))
                            title=project.summary
                            class=class
                            on:mouseenter=move |_| menu.update(|m| m.hover_project(id))
                            on:click=move |ev| {
                                ev.prevent_default();
                                menu.update(|m| {
                                    m.navigate(Section::Projects);
                                });
                                scroll_to_id(&project_anchor(id));
                            }
                        >
                            {project.short_title}
                        </a>
                    </li>
                }
            })
            .collect_view();

        view! {
            <li
                class="relative group"
                on:mouseenter=move |_| cancel_restore()
                on:mouseleave=move |_| schedule_restore()
            >
                <a
                    href=Section::Projects.href()
                    class="hover:text-teal-300"
                    on:click=move |ev: MouseEvent| {
                        if is_mobile.get_untracked() {
                            ev.prevent_default();
                            menu.update(|m| m.toggle_submenu(true));
                        } else {
                            go(ev, Section::Projects);
                        }
                    }
                >
                    {Section::Projects.label()}
                </a>
                <ul class=move || {
                    if menu.with(|m| m.submenu_open) {
                        "block mt-2 lg:absolute lg:left-0 lg:top-full lg:w-64 rounded-md border border-white/10 bg-black/95"
                    } else {
                        "hidden group-hover:lg:block lg:absolute lg:left-0 lg:top-full lg:w-64 rounded-md border border-white/10 bg-black/95"
                    }
                }>{project_links}</ul>
            </li>
        }
    };

    let links = Section::NAV
        .into_iter()
        .map(|section| {
            if section == Section::Projects {
                return Either::Left(projects_menu());
            }
            Either::Right(view! {
                <li>
                    <a
                        href=section.href()
                        class="hover:text-teal-300"
                        on:click=move |ev| go(ev, section)
                    >
                        {section.label()}
                    </a>
                </li>
            })
        })
        .collect_view();

    view! {
        <header class=header_class>
            <nav class="relative max-w-6xl mx-auto flex items-center justify-between px-6 py-4">
                <a
                    href=Section::Home.href()
                    class="text-xl font-bold tracking-wider text-teal-300"
                    on:click=move |ev| go(ev, Section::Home)
                >
                    {initials(PERSONAL_INFO.name)}
                </a>
                <button
                    class="lg:hidden flex flex-col gap-1.5"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.with(|m| m.open).to_string()
                    on:click=move |_| menu.update(NavMenu::toggle)
                >
                    <span class="block h-0.5 w-6 bg-white"></span>
                    <span class="block h-0.5 w-6 bg-white"></span>
                    <span class="block h-0.5 w-6 bg-white"></span>
                </button>
                <ul class=links_class>{links}</ul>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Soo Ji Dano"), "SJD");
        assert_eq!(initials("  single "), "s");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_project_anchor() {
        assert_eq!(project_anchor(3), "project-3");
    }
}
