//! Dashboard page served at `/`.
//!
//! The page reads `/v1/layout` to build its widgets and redraws the charts
//! with Plotly whenever the dropdown or slider changes.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:0 auto;max-width:1100px;padding:16px}
h1{text-align:center;color:#503D36;font-size:40px}
label,p{font-weight:600}
select{width:100%;padding:6px;font-size:14px}
.slider{display:flex;gap:12px;align-items:center}
.slider input[type=range]{flex:1}
.slider output{min-width:90px;text-align:right;font-variant-numeric:tabular-nums}
.chart{min-height:420px}
</style>
</head>
<body>
<h1 id="title"></h1>
<div>
  <label for="site-dropdown">Launch Site</label>
  <select id="site-dropdown"></select>
</div>
<br>
<div id="success-pie-chart" class="chart"></div>
<br>
<div>
  <p>Payload Range (kg):</p>
  <div id="payload-slider">
  <div class="slider">
    <input type="range" id="payload-low">
    <output id="payload-low-value"></output>
  </div>
  <div class="slider">
    <input type="range" id="payload-high">
    <output id="payload-high-value"></output>
  </div>
  </div>
</div>
<br>
<div id="success-payload-scatter-chart" class="chart"></div>
<script>
const $ = (id) => document.getElementById(id);

async function getJson(path, params) {
  const query = new URLSearchParams(params).toString();
  const res = await fetch(query ? `${path}?${query}` : path);
  if (!res.ok) throw new Error(`${path}: ${res.status}`);
  return res.json();
}

let bounds = { min: 0, max: 0 };
const latest = { pie: 0, scatter: 0 };

function site() { return $("site-dropdown").value; }

// The track ends on a whole step, which may overshoot the heaviest payload.
function clampToBounds(v) { return Math.min(Math.max(v, bounds.min), bounds.max); }

function range() {
  const a = Number($("payload-low").value), b = Number($("payload-high").value);
  return [clampToBounds(Math.min(a, b)), clampToBounds(Math.max(a, b))];
}

async function drawPie() {
  const request = ++latest.pie;
  const data = await getJson("/v1/charts/success-pie", { site: site() });
  if (request !== latest.pie) return;
  Plotly.react("success-pie-chart", [{
    type: "pie",
    labels: data.slices.map((s) => s.label),
    values: data.slices.map((s) => s.count),
  }], { title: data.title });
}

async function drawScatter() {
  const [low, high] = range();
  $("payload-low-value").textContent = low;
  $("payload-high-value").textContent = high;
  const request = ++latest.scatter;
  const data = await getJson("/v1/charts/payload-scatter", { site: site(), low, high });
  if (request !== latest.scatter) return;
  const traces = data.categories.map((category) => {
    const pts = data.points.filter((p) => p.booster_version_category === category);
    return {
      type: "scatter",
      mode: "markers",
      name: category,
      x: pts.map((p) => p.payload_mass_kg),
      y: pts.map((p) => p.outcome_class),
      text: pts.map((p) => [p.launch_site, p.booster_version].filter(Boolean).join("<br>")),
    };
  });
  Plotly.react("success-payload-scatter-chart", traces, {
    title: data.title,
    xaxis: { title: "Payload Mass (kg)" },
    yaxis: { title: "class" },
    legend: { title: { text: "Booster Version Category" } },
  });
}

async function init() {
  const layout = await getJson("/v1/layout");
  $("title").textContent = layout.title;

  const dropdown = $("site-dropdown");
  for (const opt of layout.site_dropdown.options) {
    dropdown.add(new Option(opt.label, opt.value, false, opt.value === layout.site_dropdown.value));
  }

  const slider = layout.payload_slider;
  bounds = { min: slider.min, max: slider.max };
  const high = slider.value.high >= slider.max ? slider.track_max : slider.value.high;
  for (const [id, value] of [["payload-low", slider.value.low], ["payload-high", high]]) {
    const input = $(id);
    input.min = slider.min;
    input.max = slider.track_max;
    input.step = slider.step;
    input.value = value;
    input.addEventListener("input", drawScatter);
  }

  dropdown.addEventListener("change", () => { drawPie(); drawScatter(); });
  await Promise.all([drawPie(), drawScatter()]);
}

init().catch((err) => console.error(err));
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::layout::{
        PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
    };

    #[test]
    fn test_page_hosts_every_widget() {
        for id in [SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID] {
            assert!(DASHBOARD_HTML.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
    }

    #[test]
    fn test_slider_track_and_clamping() {
        assert!(DASHBOARD_HTML.contains("input.max = slider.track_max"));
        assert!(DASHBOARD_HTML.contains("bounds = { min: slider.min, max: slider.max }"));
        assert!(DASHBOARD_HTML.contains("clampToBounds(Math.max(a, b))"));
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        assert!(DASHBOARD_HTML.contains("if (request !== latest.pie) return;"));
        assert!(DASHBOARD_HTML.contains("if (request !== latest.scatter) return;"));
    }

    #[test]
    fn test_page_uses_api_routes() {
        assert!(DASHBOARD_HTML.contains("/v1/layout"));
        assert!(DASHBOARD_HTML.contains("/v1/charts/success-pie"));
        assert!(DASHBOARD_HTML.contains("/v1/charts/payload-scatter"));
    }
}
