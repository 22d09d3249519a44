use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub title: &'static str,
    pub icon_name: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/",
        title: "Home",
        icon_name: "home",
    },
    NavItem {
        path: "/cursos",
        title: "Cursos",
        icon_name: "courses",
    },
    NavItem {
        path: "/alunos",
        title: "Alunos",
        icon_name: "students",
    },
    NavItem {
        path: "/matriculas",
        title: "Matrículas",
        icon_name: "enrollments",
    },
];

/// A nav item is active only on its exact path (trailing slash ignored).
pub fn is_active(current: &str, item_path: &str) -> bool {
    let normalize = |p: &str| {
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    };
    normalize(current) == normalize(item_path)
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icons::icon("courses")}</span>
                <span class="header__title">"Sistema de Cursos"</span>
            </div>
            <nav class="header__nav">
                {NAV_ITEMS.iter().map(|item| {
                    let path = item.path;
                    let active = move || location.pathname.with(|current| is_active(current, path));
                    view! {
                        <A href=path>
                            <span
                                class="header__nav-item"
                                class:header__nav-item--active=active
                            >
                                {icons::icon(item.icon_name)}
                                <span>{item.title}</span>
                            </span>
                        </A>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        assert!(is_active("/cursos", "/cursos"));
        assert!(is_active("/cursos/", "/cursos"));
        assert!(!is_active("/cursos", "/alunos"));
    }

    #[test]
    fn home_is_not_active_on_other_pages() {
        assert!(is_active("/", "/"));
        assert!(is_active("", "/"));
        assert!(!is_active("/matriculas", "/"));
    }

    #[test]
    fn every_route_has_a_nav_item() {
        let paths: Vec<&str> = NAV_ITEMS.iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/", "/cursos", "/alunos", "/matriculas"]);
    }
}
