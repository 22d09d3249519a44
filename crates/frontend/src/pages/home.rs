use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

struct QuickLink {
    href: &'static str,
    icon_name: &'static str,
    title: &'static str,
    description: &'static str,
}

const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        href: "/cursos",
        icon_name: "courses",
        title: "Cursos",
        description: "Cadastre, edite e remova cursos",
    },
    QuickLink {
        href: "/alunos",
        icon_name: "students",
        title: "Alunos",
        description: "Gerencie os alunos e suas datas de nascimento",
    },
    QuickLink {
        href: "/matriculas",
        icon_name: "enrollments",
        title: "Matrículas",
        description: "Matricule alunos e consulte o relatório por curso",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <PageHeader
                title="Bem-vindo ao Sistema de Gerenciamento de Cursos"
                subtitle="Gerencie cursos, alunos e matrículas em um só lugar"
            >
                {()}
            </PageHeader>

            <div class="home-grid">
                {QUICK_LINKS.iter().map(|link| view! {
                    <A href=link.href>
                        <div class="card card--link">
                            <div class="card__header">
                                <h2 class="card__title">{icon(link.icon_name)} {link.title}</h2>
                                <p class="card__description">{link.description}</p>
                            </div>
                        </div>
                    </A>
                }).collect_view()}
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Funcionalidades"</h2>
                </div>
                <ul class="card__content feature-list">
                    <li>"Cadastro de cursos com nome e descrição"</li>
                    <li>"Cadastro de alunos maiores de idade"</li>
                    <li>"Matrícula e cancelamento de matrícula"</li>
                    <li>"Relatório de alunos matriculados por curso"</li>
                </ul>
            </div>
        </PageFrame>
    }
}
