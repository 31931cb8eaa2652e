// Embedded dashboard. All data arrives through /api/summary; the page keeps
// no state of its own and refetches on demand.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Event Analytics</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe0f0;
      --ink: #22303c;
      --accent: #2d7a9b;
      --accent-2: #1f4053;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(31, 64, 83, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4eef7 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6b78;
      font-size: 0.95rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(31, 64, 83, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7c8894;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 122, 155, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(31, 64, 83, 0.08);
    }

    .chart-card h2 {
      margin: 0 0 10px;
      font-size: 1.2rem;
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(31, 64, 83, 0.12);
    }

    .chart-label {
      fill: #76818c;
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .breakdown {
      display: grid;
      gap: 10px;
    }

    .breakdown-row {
      display: grid;
      grid-template-columns: 120px 1fr 90px;
      align-items: center;
      gap: 12px;
      font-size: 0.95rem;
    }

    .breakdown-name {
      font-weight: 600;
      color: var(--accent-2);
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .breakdown-bar {
      height: 12px;
      border-radius: 999px;
      background: rgba(31, 64, 83, 0.1);
      overflow: hidden;
    }

    .breakdown-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
    }

    .breakdown-pct {
      text-align: right;
      color: #5b6b78;
    }

    .status {
      font-size: 0.95rem;
      color: #5b6b78;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .breakdown-row {
        grid-template-columns: 90px 1fr 70px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Event Analytics</h1>
        <p class="subtitle">Daily trend and type breakdown over the full event log.</p>
      </div>
      <button id="refresh" type="button">Refresh</button>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Total events</span>
        <span id="total" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Days covered</span>
        <span id="days" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Event types</span>
        <span id="types" class="value">--</span>
      </div>
      <div class="stat">
        <span class="label">Last updated</span>
        <span id="updated" class="value" style="font-size: 1rem">--</span>
      </div>
    </section>

    <section class="chart-card">
      <h2>Daily trend</h2>
      <svg id="chart" viewBox="0 0 600 240" aria-label="Daily trend chart" role="img"></svg>
    </section>

    <section class="chart-card">
      <h2>Type breakdown</h2>
      <div class="breakdown" id="breakdown"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const totalEl = document.getElementById('total');
    const daysEl = document.getElementById('days');
    const typesEl = document.getElementById('types');
    const updatedEl = document.getElementById('updated');
    const chartEl = document.getElementById('chart');
    const breakdownEl = document.getElementById('breakdown');
    const statusEl = document.getElementById('status');

    const MAX_ATTEMPTS = 3;
    const BASE_DELAY_MS = 500;

    const sleep = (ms) => new Promise((resolve) => setTimeout(resolve, ms));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const fetchSummaryOnce = async () => {
      const res = await fetch('/api/summary');
      const body = await res.json();
      if (!res.ok || body.status !== 'success') {
        throw new Error(body.message || 'Request failed');
      }
      return body.data;
    };

    // Each retry is an independent full fetch of the whole summary.
    const fetchSummary = async () => {
      let delay = BASE_DELAY_MS;
      for (let attempt = 1; attempt <= MAX_ATTEMPTS; attempt += 1) {
        try {
          return await fetchSummaryOnce();
        } catch (err) {
          if (attempt === MAX_ATTEMPTS) {
            throw err;
          }
          setStatus(`Retrying (${attempt}/${MAX_ATTEMPTS - 1})...`, '');
          await sleep(delay);
          delay *= 2;
        }
      }
    };

    const renderTrend = (trend) => {
      if (!trend.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 240;
      const paddingX = 44;
      const paddingY = 34;
      const top = 20;

      const values = trend.map((entry) => entry.accesses);
      const max = Math.max(...values, 1);
      const xStep = trend.length > 1 ? (width - paddingX * 2) / (trend.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / max) * (height - top - paddingY);

      const path = trend
        .map((entry, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(entry.accesses).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(trend.length / 10));
      const xLabels = trend
        .map((entry, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${entry.date.slice(5)}</text>`;
        })
        .join('');

      const circles = trend
        .map((entry, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(entry.accesses)}" r="3.5" />`)
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderBreakdown = (breakdown) => {
      if (!breakdown.length) {
        breakdownEl.innerHTML = '<p class="subtitle">No events recorded.</p>';
        return;
      }

      breakdownEl.innerHTML = breakdown
        .map((entry) => {
          const pct = Number(entry.percentage) || 0;
          return `
            <div class="breakdown-row">
              <span class="breakdown-name">${entry.name}</span>
              <div class="breakdown-bar"><div class="breakdown-fill" style="width: ${pct}%"></div></div>
              <span class="breakdown-pct">${entry.value} (${entry.percentage}%)</span>
            </div>`;
        })
        .join('');
    };

    const render = (summary) => {
      totalEl.textContent = summary.totalEvents;
      daysEl.textContent = summary.dailyTrend.length;
      typesEl.textContent = summary.typeBreakdown.length;
      updatedEl.textContent = new Date(summary.lastUpdated).toLocaleString();
      renderTrend(summary.dailyTrend);
      renderBreakdown(summary.typeBreakdown);
    };

    const refresh = async () => {
      setStatus('Loading...', '');
      try {
        render(await fetchSummary());
        setStatus('', '');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('refresh').addEventListener('click', refresh);
    refresh();
  </script>
</body>
</html>
"#;
