//! CSS for the landing page.
//!
//! Layout classes are semantic (`hero`, `plan-card`, `feature-row`). Colour
//! classes are the small utility vocabulary produced by
//! [`crate::theme::ThemeTokens`]; each token value used there has a rule
//! below. The `html.dark` marker only drives document-level details
//! (scrollbars, selection, `color-scheme`).

/// Inter font stylesheet, exposed to the page as `--font-inter`.
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Complete CSS for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --font-inter: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --lime-400: #a3e635;
    --red-500: #ef4444;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --radius: 8px;
    --container-max: 1280px;
    color-scheme: light;
}

html.dark {
    color-scheme: dark;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    line-height: 1.5;
}

h1, h2, h3, h4, p {
    margin: 0;
}

::selection {
    background: rgba(163, 230, 53, 0.35);
}

html.dark ::-webkit-scrollbar-track {
    background: var(--gray-900);
}

html.dark ::-webkit-scrollbar-thumb {
    background: var(--gray-700);
}

.font-sans {
    font-family: var(--font-inter);
}

.antialiased {
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

/* Theme tokens */
.text-white { color: #ffffff; }
.text-gray-900 { color: var(--gray-900); }
.text-gray-300 { color: var(--gray-300); }
.text-gray-600 { color: var(--gray-600); }
.text-lime-400 { color: var(--lime-400); }
.text-red-500 { color: var(--red-500); }
.bg-white { background-color: #ffffff; }
.bg-gray-50 { background-color: var(--gray-50); }
.bg-gray-100 { background-color: var(--gray-100); }
.bg-gray-700 { background-color: var(--gray-700); }
.bg-gray-800 { background-color: var(--gray-800); }
.bg-gray-900 { background-color: var(--gray-900); }
.bg-gray-800-translucent {
    background-color: rgba(31, 41, 55, 0.5);
    backdrop-filter: blur(4px);
}
.border { border: 1px solid transparent; }
.border-gray-200 { border-color: var(--gray-200); }
.border-gray-700 { border-color: var(--gray-700); }
.border-lime-400 { border-color: var(--lime-400); }
.shadow-lg {
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
}

/* Entry animation */
@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

.fade-in {
    animation: fade-in 1s ease both;
}

.fade-in-delayed {
    animation: fade-in 1s ease 0.5s both;
}

@media (prefers-reduced-motion: reduce) {
    .fade-in, .fade-in-delayed { animation: none; }
}

/* Icons */
.icon { width: 20px; height: 20px; flex-shrink: 0; }
.icon-lg { width: 24px; height: 24px; flex-shrink: 0; }
.icon-xl { width: 32px; height: 32px; flex-shrink: 0; }
.icon-hero { width: 48px; height: 48px; flex-shrink: 0; }

/* Page */
.page {
    min-height: 100vh;
    transition: background-color 0.2s ease;
}

.page-main {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 48px 16px;
}

.theme-toggle {
    position: fixed;
    top: 16px;
    right: 16px;
    padding: 12px;
    border-radius: 9999px;
    border-width: 0;
    cursor: pointer;
    display: flex;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.25);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.theme-toggle.border {
    border-width: 1px;
}

.theme-toggle:hover {
    transform: scale(1.05);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
}

.section {
    margin-bottom: 64px;
}

.section-title {
    font-size: 30px;
    font-weight: 700;
    margin-bottom: 32px;
    text-align: center;
}

.accent {
    color: var(--lime-400);
}

/* Hero */
.hero {
    text-align: center;
}

.hero-brand {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    margin-bottom: 16px;
}

.hero-title {
    font-size: 48px;
    font-weight: 700;
}

.hero-tagline {
    font-size: 20px;
}

.highlights {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 12px;
    margin-top: 32px;
}

.service-highlight {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px;
    border-radius: var(--radius);
}

/* Cards and grids */
.grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

.card {
    position: relative;
    border-radius: var(--radius);
    padding: 24px;
    border-width: 1px;
    border-style: solid;
}

.card-badge {
    position: absolute;
    top: 16px;
    right: 16px;
}

.badge {
    font-size: 14px;
    padding: 4px 12px;
    border-radius: 9999px;
}

.badge-red {
    background: var(--red-500);
    color: #ffffff;
}

.badge-lime {
    background: var(--lime-400);
    color: var(--gray-900);
}

.card-title {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 20px;
    font-weight: 600;
    margin-bottom: 24px;
}

.coverage-list,
.feature-list {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.coverage-item {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    padding: 16px;
    border-radius: var(--radius);
}

.coverage-item .icon {
    margin-top: 4px;
}

.coverage-item-title {
    font-weight: 500;
}

.benefit-icon {
    margin-bottom: 16px;
}

.benefit-title {
    font-size: 18px;
    font-weight: 600;
}

/* Plans */
.plan-card .card-title {
    margin-bottom: 16px;
}

.plan-price {
    margin-bottom: 24px;
}

.price {
    font-size: 36px;
    font-weight: 700;
}

.plan-note {
    font-size: 14px;
    margin-top: 8px;
}

.plan-description {
    margin-bottom: 24px;
}

.feature-row {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    transition: transform 0.15s ease;
}

.feature-row:hover {
    transform: scale(1.05);
}

.feature-row .icon {
    margin-top: 4px;
}

@media (min-width: 768px) {
    .grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 32px; }
    .grid-plans { grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 32px; }
}

@media (min-width: 1024px) {
    .grid-plans { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .plan-card-premium { grid-column: span 2 / span 2; }
}
"#;
