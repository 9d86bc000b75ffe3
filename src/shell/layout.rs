// Static layout chrome: header, sidebar, footer around the router outlet

use askama::Template;

#[derive(Debug)]
pub struct NavLink<'a> {
    pub path: &'a str,
    pub label: &'a str,
    pub active: bool,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div data-provider="theme" data-theme="{{ theme }}">
<div data-provider="auth" data-authenticated="{{ authenticated }}">
<div data-provider="notifications" data-count="{{ notification_count }}">
<div data-provider="router" data-location="{{ location }}">
<div class="app" style="display: flex; flex-direction: column; min-height: 100vh">
<header class="app-header"><h1>{{ title }}</h1></header>
<div style="display: flex; flex-grow: 1">
<aside class="app-sidebar"><nav>
{%- for link in nav %}
<a href="{{ link.path }}"{% if link.active %} aria-current="page"{% endif %}>{{ link.label }}</a>
{%- endfor %}
</nav></aside>
<main style="flex-grow: 1; padding: 20px">{{ outlet|safe }}</main>
</div>
<footer class="app-footer">{{ title }}</footer>
</div>
</div>
</div>
</div>
</div>
"#
)]
pub struct LayoutTemplate<'a> {
    pub title: &'a str,
    pub theme: &'a str,
    pub authenticated: bool,
    pub notification_count: usize,
    pub location: &'a str,
    pub nav: Vec<NavLink<'a>>,
    pub outlet: &'a str,
}
