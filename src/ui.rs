pub fn render_index(date: &str, today_total: f64, entries: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TODAY}}", &format!("{today_total:.2}"))
        .replace("{{ENTRIES}}", &entries.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Climate Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ee;
      --bg-2: #cfe8d4;
      --ink: #22302a;
      --accent: #2d7a4b;
      --accent-2: #2f4858;
      --travel: #3b82f6;
      --energy: #f59e0b;
      --food: #10b981;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f2e2 60%, #f2f8ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5a6a5e;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.82rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #85908a;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.today {
      color: var(--accent);
    }

    form.log {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
      align-items: end;
      background: white;
      border-radius: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 18px;
    }

    form.log label {
      display: grid;
      gap: 6px;
      font-size: 0.82rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #85908a;
    }

    form.log input,
    form.log select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: #fbfdfb;
      color: var(--ink);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 13px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-log {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 122, 75, 0.3);
    }

    .btn-clear {
      background: transparent;
      color: var(--danger);
      border: 1px solid rgba(198, 59, 43, 0.4);
      padding: 8px 14px;
      font-size: 0.85rem;
      box-shadow: none;
    }

    .btn-delete {
      background: transparent;
      color: #8b857d;
      padding: 4px 10px;
      font-size: 0.85rem;
      box-shadow: none;
    }

    .btn-delete:hover {
      color: var(--danger);
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b7a6f;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
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
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a847d;
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 16px;
      font-size: 0.9rem;
      color: #5a6a5e;
    }

    .legend .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 4px;
      margin-right: 6px;
      vertical-align: -1px;
    }

    .entries {
      display: grid;
      gap: 10px;
    }

    .entries-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .entries-header h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    ul.activity-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    ul.activity-list li {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
      background: white;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 10px 14px;
    }

    .entry-date {
      font-size: 0.85rem;
      color: #85908a;
      min-width: 92px;
    }

    .entry-label {
      font-weight: 600;
      flex: 1;
    }

    .entry-amount {
      color: #5a6a5e;
      font-size: 0.9rem;
    }

    .entry-co2 {
      font-weight: 600;
      color: var(--accent);
    }

    .entry-dot {
      width: 8px;
      height: 8px;
      border-radius: 50%;
    }

    .empty {
      color: #85908a;
      font-size: 0.95rem;
      padding: 14px;
      text-align: center;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7a6f;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    .hint {
      margin: 0;
      color: #6f7a70;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button[type="submit"] {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Climate Tracker</h1>
        <p class="subtitle">Log travel, energy and food activities; watch your CO₂ footprint.</p>
      </div>
      <button class="btn-clear" id="clear-btn" type="button">Clear all</button>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Today ({{DATE}})</span>
        <span id="today-total" class="value today">{{TODAY}} kg</span>
      </div>
      <div class="stat">
        <span class="label">Last 7 days</span>
        <span id="week-total" class="value">0.00 kg</span>
      </div>
      <div class="stat">
        <span class="label">Last 30 days</span>
        <span id="month-total" class="value">0.00 kg</span>
      </div>
      <div class="stat">
        <span class="label">Entries</span>
        <span id="entry-count" class="value">{{ENTRIES}}</span>
      </div>
    </section>

    <form class="log" id="log-form">
      <label>
        Date
        <input type="date" id="date-input" required />
      </label>
      <label>
        Activity
        <select id="type-input">
          <optgroup label="Travel">
            <option value="car">Car</option>
            <option value="public_transport">Public Transport</option>
            <option value="flight">Flight</option>
          </optgroup>
          <optgroup label="Energy">
            <option value="electricity">Electricity</option>
            <option value="gas">Natural Gas</option>
          </optgroup>
          <optgroup label="Food">
            <option value="meat">Meat Meal</option>
            <option value="dairy">Dairy Products</option>
            <option value="vegetarian">Vegetarian Meal</option>
          </optgroup>
        </select>
      </label>
      <label>
        Amount (<span id="unit-label">km</span>)
        <input type="number" id="amount-input" min="0" step="any" placeholder="0" required />
      </label>
      <button class="btn-log" type="submit">Log activity</button>
    </form>

    <section class="chart-area">
      <div class="chart-header">
        <div>
          <h2 id="chart-title">Daily trend</h2>
          <p id="chart-subtitle" class="subtitle">Total kg CO₂ per logged day (last 30 days with data).</p>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-tab="trend" role="tab" aria-selected="true">Daily trend</button>
          <button class="tab" type="button" data-tab="category" role="tab" aria-selected="false">Today by category</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Emissions chart" role="img"></svg>
      </div>
      <div class="legend" id="legend"></div>
    </section>

    <section class="entries">
      <div class="entries-header">
        <h2>Activities</h2>
      </div>
      <ul class="activity-list" id="activity-list"></ul>
      <div class="empty" id="empty-note" hidden>Nothing logged yet. Add your first activity above.</div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Daily totals cover days with at least one entry; gap days are skipped, so "last 7 days" may span a longer period.</p>
  </main>

  <script>
    const TYPE_META = {
      car: { label: 'Car', unit: 'km', category: 'travel' },
      public_transport: { label: 'Public Transport', unit: 'km', category: 'travel' },
      flight: { label: 'Flight', unit: 'km', category: 'travel' },
      electricity: { label: 'Electricity', unit: 'kWh', category: 'energy' },
      gas: { label: 'Natural Gas', unit: 'kWh', category: 'energy' },
      meat: { label: 'Meat Meal', unit: 'meals', category: 'food' },
      dairy: { label: 'Dairy Products', unit: 'servings', category: 'food' },
      vegetarian: { label: 'Vegetarian Meal', unit: 'meals', category: 'food' }
    };

    const CATEGORY_COLORS = { travel: '#3b82f6', energy: '#f59e0b', food: '#10b981' };
    const CATEGORY_LABELS = { travel: 'Travel', energy: 'Energy', food: 'Food' };

    const todayTotalEl = document.getElementById('today-total');
    const weekTotalEl = document.getElementById('week-total');
    const monthTotalEl = document.getElementById('month-total');
    const entryCountEl = document.getElementById('entry-count');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const legendEl = document.getElementById('legend');
    const listEl = document.getElementById('activity-list');
    const emptyNoteEl = document.getElementById('empty-note');
    const dateInput = document.getElementById('date-input');
    const typeInput = document.getElementById('type-input');
    const amountInput = document.getElementById('amount-input');
    const unitLabelEl = document.getElementById('unit-label');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let statsData = null;
    let activeTab = 'trend';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const kg = (value) => `${value.toFixed(2)} kg`;

    const localToday = () => {
      const now = new Date();
      const month = String(now.getMonth() + 1).padStart(2, '0');
      const day = String(now.getDate()).padStart(2, '0');
      return `${now.getFullYear()}-${month}-${day}`;
    };

    const renderLineChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.value);
      let min = 0;
      let max = Math.max(...values);
      if (max === min) {
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value.toFixed(1)}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderCategoryBars = (byCategory) => {
      const entries = ['travel', 'energy', 'food'].map((key) => ({
        key,
        label: CATEGORY_LABELS[key],
        value: byCategory[key] || 0
      }));
      const max = Math.max(...entries.map((entry) => entry.value), 1);

      const width = 600;
      const height = 260;
      const paddingX = 110;
      const barHeight = 42;
      const gap = 28;
      const top = 40;

      const bars = entries
        .map((entry, index) => {
          const yPos = top + index * (barHeight + gap);
          const barWidth = ((width - paddingX - 40) * entry.value) / max;
          return `
            <text class="chart-label" x="${paddingX - 12}" y="${yPos + barHeight / 2 + 4}" text-anchor="end">${entry.label}</text>
            <rect x="${paddingX}" y="${yPos}" width="${Math.max(barWidth, 2)}" height="${barHeight}" rx="10" fill="${CATEGORY_COLORS[entry.key]}" />
            <text class="chart-label" x="${paddingX + Math.max(barWidth, 2) + 10}" y="${yPos + barHeight / 2 + 4}">${kg(entry.value)}</text>
          `;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = bars;
    };

    const renderLegend = (show) => {
      if (!show) {
        legendEl.innerHTML = '';
        return;
      }
      legendEl.innerHTML = ['travel', 'energy', 'food']
        .map((key) => `<span><span class="swatch" style="background:${CATEGORY_COLORS[key]}"></span>${CATEGORY_LABELS[key]}</span>`)
        .join('');
    };

    const renderActiveTab = () => {
      if (!statsData) {
        return;
      }
      if (activeTab === 'category') {
        chartTitleEl.textContent = 'Today by category';
        chartSubtitleEl.textContent = 'kg CO₂ logged today, split by category.';
        renderCategoryBars(statsData.today_by_category);
        renderLegend(true);
      } else {
        chartTitleEl.textContent = 'Daily trend';
        chartSubtitleEl.textContent = 'Total kg CO₂ per logged day (last 30 days with data).';
        renderLineChart(statsData.daily.map((day) => ({ label: day.date.slice(5), value: day.total })));
        renderLegend(false);
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      renderActiveTab();
    };

    const renderList = (activities) => {
      emptyNoteEl.hidden = activities.length > 0;
      listEl.innerHTML = activities
        .slice()
        .reverse()
        .map((activity) => {
          const meta = TYPE_META[activity.type] || { label: activity.type, unit: activity.unit, category: 'travel' };
          const color = CATEGORY_COLORS[activity.category] || '#999';
          return `
            <li>
              <span class="entry-dot" style="background:${color}"></span>
              <span class="entry-date">${activity.date}</span>
              <span class="entry-label">${meta.label}</span>
              <span class="entry-amount">${activity.amount} ${activity.unit}</span>
              <span class="entry-co2">${kg(activity.co2)}</span>
              <button class="btn-delete" type="button" data-id="${activity.id}">Delete</button>
            </li>
          `;
        })
        .join('');
    };

    const updateSummary = (summary) => {
      todayTotalEl.textContent = kg(summary.today_total);
      weekTotalEl.textContent = kg(summary.week_total);
      monthTotalEl.textContent = kg(summary.month_total);
      entryCountEl.textContent = summary.total_entries;
    };

    const fetchJson = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const refresh = async () => {
      const [activities, summary, stats] = await Promise.all([
        fetchJson('/api/activities'),
        fetchJson('/api/summary'),
        fetchJson('/api/stats')
      ]);
      renderList(activities);
      updateSummary(summary);
      statsData = stats;
      renderActiveTab();
    };

    const submitActivity = async () => {
      const amount = Number(amountInput.value);
      if (!Number.isFinite(amount) || amount <= 0) {
        setStatus('Amount must be a positive number', 'error');
        return;
      }

      setStatus('Saving...', 'info');
      await fetchJson('/api/activities', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: dateInput.value, type: typeInput.value, amount })
      });
      amountInput.value = '';
      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    document.getElementById('log-form').addEventListener('submit', (event) => {
      event.preventDefault();
      submitActivity().catch((err) => setStatus(err.message, 'error'));
    });

    typeInput.addEventListener('change', () => {
      unitLabelEl.textContent = TYPE_META[typeInput.value].unit;
    });

    listEl.addEventListener('click', (event) => {
      const button = event.target.closest('.btn-delete');
      if (!button) {
        return;
      }
      fetchJson(`/api/activities/${button.dataset.id}`, { method: 'DELETE' })
        .then(refresh)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('clear-btn').addEventListener('click', () => {
      if (!confirm('Clear all activities? This cannot be undone.')) {
        return;
      }
      fetchJson('/api/activities', { method: 'DELETE' })
        .then(refresh)
        .catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    dateInput.value = localToday();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
