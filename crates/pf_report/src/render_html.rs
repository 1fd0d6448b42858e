//! HTML renderer: compact, offline summary from an embedded template.
//! Text fields are auto-escaped (template name ends in `.html`).

use minijinja::{context, Environment};

use crate::{DashboardModel, ReportError, NO_SIGNALS};

static TEMPLATE: &str = r#"<!doctype html>
<html lang="en"><meta charset="utf-8">
<title>Profile: {{ m.headline }}</title>
<h1>{{ m.headline }}</h1>
{% if not m.has_data %}
<p class="muted">{{ m.headline }}</p>
{% else %}
<p class="muted">{{ m.document_id }}</p>
{% if m.summary %}<p>{{ m.summary }}</p>{% endif %}

<h2>Threat</h2>
<p>Risk {{ m.gauge.risk }} / 100 (remaining {{ m.gauge.remaining }})</p>
<ul>
  <li>Final threat score: {{ m.score_card.final_threat_score }}</li>
  <li>Breach impact score: {{ m.score_card.breach_impact_score }}</li>
  <li>Actor boost estimate: {{ m.score_card.actor_boost_estimate }}</li>
  <li>Personal exposures: {{ m.person_exposures }}</li>
</ul>

<h2>Risk levels</h2>
<table>{% for b in m.risk_bars %}<tr><td>{{ b.label }}</td><td>{{ b.count }}</td></tr>{% endfor %}</table>

<h2>Breaches by year</h2>
{% if m.breach_year_bars %}
<table>{% for b in m.breach_year_bars %}<tr><td>{{ b.label }}</td><td>{{ b.count }}</td></tr>{% endfor %}</table>
{% else %}<p class="muted">{{ no_signals }}</p>
{% endif %}
{% endif %}

<h2>Actor intelligence</h2>
{% if m.actors.placeholder %}<p class="muted">{{ m.actors.placeholder }}</p>{% else %}
<table>{% for a in m.actors.rows %}<tr><td>{{ a.platform }}</td><td>{{ a.identity }}</td><td>{{ a.risk }}</td><td>{{ a.confidence }}</td><td>{{ a.note }}</td></tr>{% endfor %}</table>
{% endif %}

<h2>Breach incidents</h2>
{% if m.breaches.placeholder %}<p class="muted">{{ m.breaches.placeholder }}</p>{% else %}
<ul>{% for b in m.breaches.rows %}<li><strong>{{ b.organization }}</strong> ({{ b.year }}): {% if b.records_lost is not none %}{{ b.records_lost }}{% else %}Unknown{% endif %} records{% if b.story %}. {{ b.story }}{% endif %}</li>{% endfor %}</ul>
{% endif %}

<h2>Clusters</h2>
{% if m.clusters.placeholder %}<p class="muted">{{ m.clusters.placeholder }}</p>{% else %}
<ul>{% for c in m.clusters.rows %}<li>{{ c.label }} (score {{ c.score }}, {{ c.occurrences }} occurrences{% if c.sources %}: {{ c.sources | join(", ") }}{% endif %})</li>{% endfor %}</ul>
{% endif %}
</html>
"#;

pub fn render_html(model: &DashboardModel) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("dashboard.html", TEMPLATE)
        .map_err(|_| ReportError::Template("add_template"))?;
    let tmpl = env
        .get_template("dashboard.html")
        .map_err(|_| ReportError::Template("get_template"))?;
    tmpl.render(context! { m => model, no_signals => NO_SIGNALS })
        .map_err(|_| ReportError::Template("render_html"))
}
