use crate::models::{Mood, MoodSummary};

pub fn render_index(summary: Option<&MoodSummary>) -> String {
    let (current, average) = match summary {
        Some(summary) => (summary.current_mood.as_str(), summary.average.as_str()),
        None => ("No data", "No data"),
    };
    INDEX_HTML
        .replace("{{MOOD_BUTTONS}}", &mood_buttons())
        .replace("{{CURRENT_MOOD}}", current)
        .replace("{{AVERAGE}}", average)
}

fn mood_buttons() -> String {
    Mood::ALL
        .iter()
        .map(|mood| {
            format!(
                r#"<form method="post" action="/mood/{value}"><button class="mood-btn" data-mood="{value}" type="submit">{label}</button></form>"#,
                value = mood.as_str(),
                label = mood.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Nexus Mood Companion</title>
  <style>
    :root {
      --bg: #f5f6ff;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #6366f1;
      --accent-soft: rgba(99, 102, 241, 0.1);
      --card: #ffffff;
      --ok-bg: #d1fae5;
      --ok-ink: #059669;
      --err-bg: #fee2e2;
      --err-ink: #dc2626;
      --shadow: 0 20px 50px rgba(31, 41, 55, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      background: linear-gradient(160deg, var(--bg), #eef2ff 60%, #fdf4ff);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    header.top {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 18px 32px;
    }

    header.top h1 { margin: 0; font-size: 1.5rem; }

    .auth-buttons { display: flex; gap: 10px; }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button.ghost { background: transparent; color: var(--accent); border: 1px solid var(--accent); }
    button:active { transform: scale(0.98); }

    main {
      width: min(980px, 100%);
      margin: 0 auto;
      padding: 0 18px 64px;
      display: grid;
      gap: 28px;
    }

    section.card {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 18px;
    }

    section.card h2 { margin: 0; }

    .mood-buttons { display: flex; flex-wrap: wrap; gap: 10px; }
    .mood-buttons form { margin: 0; }
    .mood-btn { background: var(--accent-soft); color: var(--accent); }
    .mood-btn.selected { background: var(--accent); color: white; }

    #mood-chart { width: 100%; height: 260px; display: block; }
    .chart-line { fill: none; stroke: var(--accent); stroke-width: 3; }
    .chart-area { fill: var(--accent-soft); stroke: none; }
    .chart-point { fill: var(--accent); stroke: white; stroke-width: 2; }
    .chart-grid { stroke: rgba(0, 0, 0, 0.05); }
    .chart-label { fill: var(--muted); font-size: 12px; }

    .mood-summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
    .summary-item { background: var(--bg); border-radius: 16px; padding: 16px; }
    .summary-item h4 { margin: 0 0 6px; color: var(--muted); font-weight: 500; }
    .summary-item p { margin: 0; font-size: 1.3rem; font-weight: 600; }

    .filters { display: flex; gap: 8px; flex-wrap: wrap; }
    .filter-btn { background: transparent; color: var(--muted); border: 1px solid #e5e7eb; }
    .filter-btn.active { background: var(--accent); color: white; border-color: var(--accent); }

    .resource-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; }
    .resource-card { border-radius: 18px; overflow: hidden; border: 1px solid #e5e7eb; animation: fadeIn 0.5s ease forwards; }
    .resource-card img { width: 100%; height: 120px; object-fit: cover; display: block; }
    .resource-content { padding: 14px; display: grid; gap: 8px; }
    .resource-content h3, .resource-content p { margin: 0; }
    .resource-type { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--accent); }
    .resource-meta { color: var(--muted); font-size: 0.85rem; }

    .cta { display: flex; gap: 12px; flex-wrap: wrap; }
    .cta-button { position: relative; overflow: hidden; }
    .ripple {
      position: absolute;
      width: 12px;
      height: 12px;
      border-radius: 50%;
      background: rgba(255, 255, 255, 0.6);
      transform: translate(-50%, -50%) scale(0);
      animation: ripple 1s ease-out;
      pointer-events: none;
    }

    footer { text-align: center; color: var(--muted); padding: 24px; display: grid; gap: 8px; }
    .footer-section a { color: var(--muted); margin: 0 8px; position: relative; }
    .link-preview {
      position: absolute;
      bottom: 120%;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: white;
      font-size: 0.75rem;
      padding: 4px 8px;
      border-radius: 6px;
      white-space: nowrap;
    }
    .emergency { font-weight: 600; color: var(--err-ink); }
    .emergency.pulse { animation: pulse 1s ease; }

    .modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); z-index: 1000; }
    .modal-content {
      background: white;
      width: min(420px, 92%);
      margin: 12vh auto 0;
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 12px;
    }
    .modal-content input { padding: 10px 12px; border-radius: 10px; border: 1px solid #e5e7eb; font-size: 0.95rem; }
    .close { justify-self: end; cursor: pointer; font-size: 1.4rem; color: var(--muted); }

    .chat-toggle { position: fixed; right: 24px; bottom: 24px; z-index: 900; }
    .chat-container {
      display: none;
      position: fixed;
      right: 24px;
      bottom: 84px;
      width: min(360px, 92vw);
      height: 460px;
      background: white;
      border-radius: 20px;
      box-shadow: var(--shadow);
      flex-direction: column;
      overflow: hidden;
      z-index: 900;
      transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .chat-header { display: flex; justify-content: space-between; align-items: center; padding: 14px 18px; background: var(--accent); color: white; }
    .minimize-chat { background: transparent; padding: 4px 8px; }
    .chat-messages { flex: 1; overflow-y: auto; padding: 14px; display: flex; flex-direction: column; gap: 8px; }
    .message { padding: 10px 14px; border-radius: 14px; max-width: 80%; transition: opacity 0.3s ease, transform 0.3s ease; }
    .message.user { align-self: flex-end; background: var(--accent); color: white; }
    .message.bot { align-self: flex-start; background: var(--bg); }
    .message.typing { color: var(--muted); }
    .chat-input { display: flex; gap: 8px; padding: 12px; border-top: 1px solid #e5e7eb; }
    .chat-input input { flex: 1; padding: 10px 12px; border-radius: 999px; border: 1px solid #e5e7eb; }

    .toast { position: fixed; top: 20px; right: 20px; padding: 1rem 2rem; border-radius: 8px; z-index: 2000; }
    .toast.success { background: var(--ok-bg); color: var(--ok-ink); }
    .toast.error { background: var(--err-bg); color: var(--err-ink); }

    .loader { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 2000; }
    .spinner { width: 40px; height: 40px; border: 4px solid #f3f3f3; border-top: 4px solid var(--accent); border-radius: 50%; animation: spin 1s linear infinite; }

    @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
    @keyframes fadeIn { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: translateY(0); } }
    @keyframes ripple { to { transform: translate(-50%, -50%) scale(18); opacity: 0; } }
    @keyframes pulse { 50% { transform: scale(1.05); } }

    @media (max-width: 600px) {
      header.top { padding: 14px 18px; }
      section.card { padding: 20px; }
    }
  </style>
</head>
<body>
  <header class="top">
    <h1>Nexus</h1>
    <div class="auth-buttons">
      <button id="loginBtn" class="ghost" type="button">Log In</button>
      <button id="signupBtn" type="button">Sign Up</button>
    </div>
  </header>

  <main>
    <section class="card" id="mood">
      <h2>How are you feeling today?</h2>
      <div class="mood-buttons">
        {{MOOD_BUTTONS}}
      </div>
      <svg id="mood-chart" viewBox="0 0 600 260" role="img" aria-label="Mood history"></svg>
      <div class="mood-summary">
        <div class="summary-item">
          <h4>Current Mood</h4>
          <p id="current-mood">{{CURRENT_MOOD}}</p>
        </div>
        <div class="summary-item">
          <h4>7-Day Average</h4>
          <p id="average-mood">{{AVERAGE}}</p>
        </div>
      </div>
    </section>

    <section class="card" id="resources">
      <h2>Resources</h2>
      <div class="filters">
        <button class="filter-btn active" type="button" data-filter="all">All</button>
        <button class="filter-btn" type="button" data-filter="articles">Articles</button>
        <button class="filter-btn" type="button" data-filter="videos">Videos</button>
        <button class="filter-btn" type="button" data-filter="exercises">Exercises</button>
      </div>
      <div class="resource-grid"></div>
    </section>

    <section class="card">
      <h2>Ready to start?</h2>
      <div class="cta">
        <button class="cta-button primary" type="button">Start your journey</button>
        <button class="cta-button ghost" type="button">View plans</button>
      </div>
    </section>
  </main>

  <footer>
    <div class="footer-section">
      <a href="#mood" aria-label="Track your mood">Mood</a>
      <a href="#resources" aria-label="Browse resources">Resources</a>
    </div>
    <div class="social-links">
      <a href="https://twitter.com" target="_blank" rel="noopener">Twitter</a>
      <a href="https://instagram.com" target="_blank" rel="noopener">Instagram</a>
    </div>
    <p class="emergency">In crisis? Call your local emergency number.</p>
  </footer>

  <div class="modal" id="loginModal">
    <div class="modal-content">
      <span class="close">&times;</span>
      <h3>Log In</h3>
      <form id="loginForm">
        <input type="email" name="email" placeholder="Email" required />
        <input type="password" name="password" placeholder="Password" required />
        <button type="submit">Log In</button>
      </form>
    </div>
  </div>

  <div class="modal" id="signupModal">
    <div class="modal-content">
      <span class="close">&times;</span>
      <h3>Sign Up</h3>
      <form id="signupForm">
        <input type="text" name="name" placeholder="Full name" required />
        <input type="email" name="email" placeholder="Email" required />
        <input type="password" name="password" placeholder="Password" required />
        <input type="password" name="confirm_password" placeholder="Confirm password" required />
        <button type="submit">Create account</button>
      </form>
    </div>
  </div>

  <button class="chat-toggle" id="chatToggle" type="button"><span class="chat-text">Need Help?</span></button>
  <div class="chat-container" id="chatContainer">
    <div class="chat-header">
      <strong>Nexus</strong>
      <button class="minimize-chat" type="button">&minus;</button>
    </div>
    <div class="chat-messages"></div>
    <div class="chat-input">
      <input type="text" placeholder="Type a message..." />
      <button class="send-message" type="button">Send</button>
    </div>
  </div>

  <script>
    const $ = (selector) => document.querySelector(selector);
    const $$ = (selector) => Array.from(document.querySelectorAll(selector));

    const notify = (notice) => {
      if (!notice) return;
      const toast = document.createElement('div');
      toast.className = `toast ${notice.kind}`;
      toast.textContent = notice.message;
      document.body.appendChild(toast);
      setTimeout(() => toast.remove(), 3000);
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      const body = await res.json().catch(() => null);
      if (!res.ok) {
        const err = new Error((body && body.message) || 'Request failed');
        err.status = res.status;
        err.notice = body;
        throw err;
      }
      return body;
    };

    const post = (path, payload) => api(path, { method: 'POST', body: JSON.stringify(payload || {}) });
    const fail = (err) => notify(err.notice || { message: err.message, kind: 'error' });

    // modals
    const openModal = (modal) => {
      modal.style.display = 'block';
      document.body.style.overflow = 'hidden';
    };
    const closeModal = (modal) => {
      modal.style.display = 'none';
      document.body.style.overflow = 'auto';
    };

    const showLoading = () => {
      const loader = document.createElement('div');
      loader.className = 'loader';
      loader.innerHTML = '<div class="spinner"></div>';
      document.body.appendChild(loader);
    };
    const hideLoading = () => {
      const loader = $('.loader');
      if (loader) loader.remove();
    };

    // auth
    const loginBtn = $('#loginBtn');
    const signupBtn = $('#signupBtn');
    const loginModal = $('#loginModal');
    const signupModal = $('#signupModal');

    const updateAuthUI = (user) => {
      if (user) {
        loginBtn.style.display = 'none';
        signupBtn.textContent = user.name;
        signupBtn.onclick = logout;
      } else {
        loginBtn.style.display = 'block';
        signupBtn.textContent = 'Sign Up';
        signupBtn.onclick = () => openModal(signupModal);
      }
    };

    const logout = () => {
      post('/api/auth/logout')
        .then((res) => {
          updateAuthUI(res.user);
          notify(res.notice);
        })
        .catch(fail);
    };

    const submitAuth = (form, path, modal) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const payload = Object.fromEntries(new FormData(form).entries());
        showLoading();
        post(path, payload)
          .then((res) => {
            updateAuthUI(res.user);
            closeModal(modal);
            notify(res.notice);
          })
          .catch(fail)
          .finally(hideLoading);
      });
    };

    loginBtn.addEventListener('click', () => openModal(loginModal));
    submitAuth($('#loginForm'), '/api/auth/login', loginModal);
    submitAuth($('#signupForm'), '/api/auth/signup', signupModal);
    $$('.close').forEach((btn) => btn.addEventListener('click', () => closeModal(btn.closest('.modal'))));
    window.addEventListener('click', (event) => {
      if (event.target.classList.contains('modal')) closeModal(event.target);
    });

    // mood chart
    const chartEl = $('#mood-chart');

    const renderMoodChart = (snapshot) => {
      const { labels, scores, tooltips } = snapshot.chart;
      const { min, max, tick_labels: ticks } = snapshot.axis;
      const width = 600;
      const height = 260;
      const left = 86;
      const right = 24;
      const top = 20;
      const bottom = 34;

      const span = max - min;
      const xStep = scores.length > 1 ? (width - left - right) / (scores.length - 1) : 0;
      const x = (index) => left + index * xStep;
      const y = (score) => height - bottom - ((score - min) / span) * (height - top - bottom);

      let grid = '';
      for (let score = min; score <= max; score += 1) {
        grid += `<line class="chart-grid" x1="${left}" y1="${y(score)}" x2="${width - right}" y2="${y(score)}" />`;
        grid += `<text class="chart-label" x="${left - 10}" y="${y(score) + 4}" text-anchor="end">${ticks[score - min]}</text>`;
      }

      if (!scores.length) {
        chartEl.innerHTML = `${grid}<text class="chart-label" x="50%" y="50%" text-anchor="middle">No moods logged yet</text>`;
        return;
      }

      const path = scores
        .map((score, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(score).toFixed(2)}`)
        .join(' ');
      const area = `${path} L ${x(scores.length - 1).toFixed(2)} ${y(min)} L ${x(0).toFixed(2)} ${y(min)} Z`;
      const points = scores
        .map((score, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(score)}" r="5"><title>${tooltips[index]}</title></circle>`)
        .join('');
      const xLabels = labels
        .map((label, index) => `<text class="chart-label" x="${x(index)}" y="${height - bottom + 20}" text-anchor="middle">${label}</text>`)
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-area" d="${area}" /><path class="chart-line" d="${path}" />${points}${xLabels}`;
    };

    const renderMoodSummary = (snapshot) => {
      $('#current-mood').textContent = snapshot.summary ? snapshot.summary.current_mood : 'No data';
      $('#average-mood').textContent = snapshot.summary ? snapshot.summary.average : 'No data';
    };

    const renderMood = (snapshot) => {
      renderMoodChart(snapshot);
      renderMoodSummary(snapshot);
    };

    $$('.mood-btn').forEach((btn) => {
      btn.closest('form').addEventListener('submit', (event) => {
        event.preventDefault();
        post('/api/mood', { mood: btn.dataset.mood })
          .then((res) => {
            renderMood(res);
            notify(res.notice);
            btn.classList.add('selected');
            setTimeout(() => btn.classList.remove('selected'), 1000);
          })
          .catch(fail);
      });
    });

    // chat
    const chatToggle = $('#chatToggle');
    const chatContainer = $('#chatContainer');
    const chatMessages = $('.chat-messages');
    const chatInput = $('.chat-input input');
    const sendButton = $('.send-message');
    let rendered = 0;

    const addMessage = (message) => {
      const div = document.createElement('div');
      div.className = `message ${message.sender}`;
      div.textContent = message.text;
      div.style.opacity = '0';
      div.style.transform = 'translateY(10px)';
      chatMessages.appendChild(div);
      setTimeout(() => {
        div.style.opacity = '1';
        div.style.transform = 'translateY(0)';
      }, 50);
      chatMessages.scrollTop = chatMessages.scrollHeight;
      return div;
    };

    const renderTranscript = (chat) => {
      chat.messages.slice(rendered).forEach(addMessage);
      rendered = chat.messages.length;
    };

    const showChat = (open) => {
      if (open) {
        chatContainer.style.display = 'flex';
        chatContainer.style.opacity = '0';
        chatContainer.style.transform = 'translateY(20px)';
        setTimeout(() => {
          chatContainer.style.opacity = '1';
          chatContainer.style.transform = 'translateY(0)';
        }, 50);
        chatInput.focus();
        chatToggle.querySelector('.chat-text').textContent = 'Close Chat';
      } else {
        chatContainer.style.opacity = '0';
        chatContainer.style.transform = 'translateY(20px)';
        setTimeout(() => { chatContainer.style.display = 'none'; }, 300);
        chatToggle.querySelector('.chat-text').textContent = 'Need Help?';
      }
    };

    const toggleChat = () => post('/api/chat/toggle').then((chat) => showChat(chat.open)).catch(fail);
    chatToggle.addEventListener('click', toggleChat);
    $('.minimize-chat').addEventListener('click', toggleChat);

    let waiting = false;
    const handleChat = () => {
      const message = chatInput.value.trim();
      if (!message || waiting) return;
      waiting = true;
      chatInput.value = '';
      addMessage({ text: message, sender: 'user' });
      const typing = addMessage({ text: '...', sender: 'bot' });
      typing.classList.add('typing');
      post('/api/chat', { message })
        .then((chat) => {
          typing.remove();
          const reply = chat.messages[chat.messages.length - 1];
          addMessage(reply);
          rendered = chat.messages.length;
        })
        .catch((err) => {
          typing.remove();
          if (err.status !== 409) fail(err);
        })
        .finally(() => { waiting = false; });
    };

    sendButton.addEventListener('click', handleChat);
    chatInput.addEventListener('keypress', (event) => {
      if (event.key === 'Enter') handleChat();
    });

    // resources
    const resourceGrid = $('.resource-grid');

    const resourceCard = (resource) => `
      <div class="resource-card" data-type="${resource.type}" data-id="${resource.id}">
        <img src="${resource.image}" alt="${resource.title}" />
        <div class="resource-content">
          <span class="resource-type">${resource.type}</span>
          <h3>${resource.title}</h3>
          <p>${resource.description}</p>
          <div class="resource-meta">${resource.readTime || resource.duration || resource.difficulty || ''}</div>
          <button class="resource-btn" type="button">Access Resource</button>
        </div>
      </div>`;

    const loadResources = (filter) =>
      api(`/api/resources?type=${encodeURIComponent(filter)}`).then((items) => {
        resourceGrid.innerHTML = items.map(resourceCard).join('');
        $$('.resource-btn').forEach((btn) => {
          btn.addEventListener('click', () => {
            const id = btn.closest('.resource-card').dataset.id;
            post(`/api/resources/${id}/open`).then(notify).catch(fail);
          });
        });
      });

    $$('.filter-btn').forEach((btn) => {
      btn.addEventListener('click', () => {
        $$('.filter-btn').forEach((other) => other.classList.remove('active'));
        btn.classList.add('active');
        loadResources(btn.dataset.filter).catch(fail);
      });
    });

    // embellishments
    $$('.footer-section a').forEach((link) => {
      link.addEventListener('mouseenter', () => {
        const preview = document.createElement('span');
        preview.className = 'link-preview';
        preview.textContent = link.getAttribute('aria-label') || 'View Page';
        link.appendChild(preview);
      });
      link.addEventListener('mouseleave', () => {
        const preview = link.querySelector('.link-preview');
        if (preview) preview.remove();
      });
    });

    $$('.social-links a').forEach((link) => {
      link.addEventListener('click', (event) => {
        event.preventDefault();
        window.open(link.href, '_blank', 'noopener,noreferrer');
        notify({ message: `Opening ${link.textContent} in a new tab`, kind: 'success' });
      });
    });

    const emergency = $('.emergency');
    setInterval(() => {
      emergency.classList.add('pulse');
      setTimeout(() => emergency.classList.remove('pulse'), 1000);
    }, 5000);

    $$('.cta-button').forEach((button) => {
      button.addEventListener('mouseenter', (event) => {
        const rect = button.getBoundingClientRect();
        const ripple = document.createElement('span');
        ripple.className = 'ripple';
        ripple.style.left = `${event.clientX - rect.left}px`;
        ripple.style.top = `${event.clientY - rect.top}px`;
        button.appendChild(ripple);
        setTimeout(() => ripple.remove(), 1000);
      });
      button.addEventListener('click', () => {
        const message = button.classList.contains('primary') ? 'Starting your journey...' : 'Opening pricing plans...';
        notify({ message, kind: 'success' });
      });
    });

    $$('a[href^="#"]').forEach((anchor) => {
      anchor.addEventListener('click', (event) => {
        const target = document.querySelector(anchor.getAttribute('href'));
        if (!target) return;
        event.preventDefault();
        target.scrollIntoView({ behavior: 'smooth', block: 'start' });
      });
    });

    // startup
    api('/api/mood').then(renderMood).catch(fail);
    api('/api/auth/me').then(updateAuthUI).catch(fail);
    api('/api/chat')
      .then((chat) => {
        renderTranscript(chat);
        if (chat.open) showChat(true);
      })
      .catch(fail);
    loadResources('all').catch(fail);
  </script>
</body>
</html>
"##;
