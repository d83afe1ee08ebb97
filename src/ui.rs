/// `initial_month` is `YYYY-MM`, or empty to open on the current month.
pub fn render_index(initial_month: &str) -> String {
    INDEX_HTML.replace("{{INITIAL_MONTH}}", initial_month)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>AQI Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f1;
      --bg-2: #c9ded8;
      --ink: #22302d;
      --muted: #5d6b68;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --good: #5bb974;
      --satisfactory: #a5d46a;
      --moderate: #f4c542;
      --poor: #f29445;
      --very-poor: #e4572e;
      --severe: #8e2c48;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3ede9 60%, #f4f7f6 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .month-nav h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    button {
      font: inherit;
      border: none;
      border-radius: 999px;
      padding: 8px 18px;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:hover {
      transform: translateY(-1px);
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .weekday {
      text-align: center;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .day {
      min-height: 72px;
      border-radius: 14px;
      padding: 8px;
      background: rgba(47, 72, 88, 0.06);
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      cursor: pointer;
    }

    .day.blank {
      background: transparent;
      cursor: default;
    }

    .day .num {
      font-weight: 600;
    }

    .day .avg {
      font-size: 0.8rem;
    }

    .day.good { background: var(--good); }
    .day.satisfactory { background: var(--satisfactory); }
    .day.moderate { background: var(--moderate); }
    .day.poor { background: var(--poor); }
    .day.very-poor { background: var(--very-poor); color: #fff; }
    .day.severe { background: var(--severe); color: #fff; }

    .status {
      min-height: 1.2em;
      margin: 0;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--very-poor);
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(34, 48, 45, 0.45);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .modal.hidden {
      display: none;
    }

    .modal-card {
      width: min(680px, 100%);
      background: #fff;
      border-radius: 22px;
      padding: 28px;
      display: grid;
      gap: 12px;
      box-shadow: var(--shadow);
    }

    .modal-card h3 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
    }

    .modal-card p {
      margin: 0;
    }

    .chart {
      width: 100%;
      height: auto;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: #fff;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      font-size: 11px;
      fill: var(--muted);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Air Quality Calendar</h1>
      <p class="subtitle">Daily AQI averages. Pick a day to see its readings.</p>
    </header>

    <div class="month-nav">
      <button type="button" id="prev-month">&larr; Prev</button>
      <h2 id="month-label"></h2>
      <button type="button" id="next-month">Next &rarr;</button>
    </div>

    <div class="calendar" id="calendar"></div>
    <p class="status" id="status"></p>
  </main>

  <div class="modal hidden" id="info-modal">
    <div class="modal-card">
      <h3 id="modal-date"></h3>
      <p id="modal-average"></p>
      <p id="modal-category"></p>
      <p id="modal-recommendation"></p>
      <svg class="chart" id="aqi-chart" viewBox="0 0 600 260" role="img" aria-label="AQI readings"></svg>
      <button type="button" id="close-modal">Close</button>
    </div>
  </div>

  <script>
    const initialMonth = '{{INITIAL_MONTH}}';

    const calendarEl = document.getElementById('calendar');
    const monthLabelEl = document.getElementById('month-label');
    const statusEl = document.getElementById('status');
    const modalEl = document.getElementById('info-modal');
    const modalDateEl = document.getElementById('modal-date');
    const modalAverageEl = document.getElementById('modal-average');
    const modalCategoryEl = document.getElementById('modal-category');
    const modalRecommendationEl = document.getElementById('modal-recommendation');
    const chartEl = document.getElementById('aqi-chart');

    const WEEKDAYS = ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun'];

    const CATEGORY_CLASS = {
      'Good': 'good',
      'Satisfactory': 'satisfactory',
      'Moderate': 'moderate',
      'Poor': 'poor',
      'Very Poor': 'very-poor',
      'Severe': 'severe'
    };

    const RECOMMENDATION = {
      'Good': 'Minimal impact. A good day to be outside.',
      'Satisfactory': 'Minor breathing discomfort for sensitive people.',
      'Moderate': 'People with asthma, lung or heart disease may feel discomfort.',
      'Poor': 'Most people may feel discomfort on prolonged exposure.',
      'Very Poor': 'Limit time outdoors. Prolonged exposure may cause respiratory illness.',
      'Severe': 'Stay indoors. Affects healthy people and seriously impacts those with disease.'
    };

    const pad = (value) => value.toString().padStart(2, '0');

    let view = (() => {
      const match = /^(\d{4})-(\d{2})$/.exec(initialMonth);
      if (match) {
        return { year: Number(match[1]), month: Number(match[2]) };
      }
      const today = new Date();
      return { year: today.getFullYear(), month: today.getMonth() + 1 };
    })();

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const shiftMonth = (delta) => {
      const index = view.year * 12 + (view.month - 1) + delta;
      view = { year: Math.floor(index / 12), month: (index % 12) + 1 };
      loadMonth();
    };

    const renderCalendar = (monthly) => {
      const { year, month } = view;
      const first = new Date(year, month - 1, 1);
      const daysInMonth = new Date(year, month, 0).getDate();
      const leading = (first.getDay() + 6) % 7;

      monthLabelEl.textContent = first.toLocaleString(undefined, { month: 'long', year: 'numeric' });
      calendarEl.innerHTML = '';

      WEEKDAYS.forEach((name) => {
        const el = document.createElement('div');
        el.className = 'weekday';
        el.textContent = name;
        calendarEl.appendChild(el);
      });

      for (let i = 0; i < leading; i += 1) {
        const el = document.createElement('div');
        el.className = 'day blank';
        calendarEl.appendChild(el);
      }

      for (let day = 1; day <= daysInMonth; day += 1) {
        const date = `${year}-${pad(month)}-${pad(day)}`;
        const entry = monthly[date];
        const el = document.createElement('div');
        el.className = 'day';
        el.innerHTML = `<span class="num">${day}</span>`;
        if (entry) {
          el.classList.add(CATEGORY_CLASS[entry.category] || 'severe');
          el.innerHTML += `<span class="avg">${entry.averageAQI.toFixed(0)}</span>`;
          el.title = `${entry.category} (${entry.averageAQI.toFixed(2)})`;
        }
        el.addEventListener('click', () => openDay(date));
        calendarEl.appendChild(el);
      }

      const count = Object.keys(monthly).length;
      setStatus(count ? `${count} days with data` : 'No data for this month.', 'info');
    };

    const loadMonth = async () => {
      try {
        const res = await fetch(`/monthly-aqi?year=${view.year}&month=${pad(view.month)}`);
        if (!res.ok) {
          throw new Error('Unable to load month');
        }
        renderCalendar(await res.json());
      } catch (err) {
        console.error('Error fetching month:', err);
        renderCalendar({});
        setStatus(err.message, 'error');
      }
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderLineChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No readings</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const min = 0;
      const max = Math.max(50, ...points.map((point) => point.value));
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
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 8));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="3" />`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const openDay = async (date) => {
      modalDateEl.textContent = `Air quality for ${date}`;
      modalAverageEl.textContent = 'Loading...';
      modalCategoryEl.textContent = '';
      modalRecommendationEl.textContent = '';
      chartEl.innerHTML = '';
      modalEl.classList.remove('hidden');

      try {
        const res = await fetch(`/aqi?date=${date}`);
        if (res.status === 404) {
          modalAverageEl.textContent = 'No data available.';
          return;
        }
        if (!res.ok) {
          throw new Error('Unable to load day');
        }
        const data = await res.json();
        modalAverageEl.textContent = `Daily average AQI: ${data.dailyAverageAQI.toFixed(2)}`;
        modalCategoryEl.textContent = `Category: ${data.category}`;
        modalRecommendationEl.textContent = `Recommendation: ${RECOMMENDATION[data.category] || ''}`;
        renderLineChart(
          data.hourlyData.map((sample) => ({
            label: sample.time.slice(0, 5),
            value: sample.aqi
          }))
        );
      } catch (err) {
        console.error('Error fetching day:', err);
        modalAverageEl.textContent = 'No data available.';
      }
    };

    document.getElementById('prev-month').addEventListener('click', () => shiftMonth(-1));
    document.getElementById('next-month').addEventListener('click', () => shiftMonth(1));
    document.getElementById('close-modal').addEventListener('click', () => {
      modalEl.classList.add('hidden');
    });

    loadMonth();
  </script>
</body>
</html>
"#;
