use super::{DEFAULT_POINTS, ExerciseSpec, KindSpec};
use crate::predicate::CheckSpec;

pub(super) const INTERMEDIATE: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Flexbox Layout",
        description: "Create a flexible navigation menu using flexbox",
        instructions: "Create a horizontal navigation menu with 4 items using flexbox. The items \
                       should be evenly spaced and centered vertically.",
        hints: &[
            "Use display: flex on the container",
            "Use justify-content for horizontal spacing",
            "Use align-items for vertical alignment",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    .menu {
        /* Add your flexbox styles here */
    }
</style>
<ul class="menu">
    <li>Home</li>
    <li>About</li>
    <li>Services</li>
    <li>Contact</li>
</ul>"#,
            solution: r#"<style>
    .menu {
        display: flex;
        justify-content: space-between;
        align-items: center;
        list-style: none;
        height: 60px;
    }
</style>
<ul class="menu">
    <li>Home</li>
    <li>About</li>
    <li>Services</li>
    <li>Contact</li>
</ul>"#,
            checks: &[
                CheckSpec::new("display: flex", &[r"display\s*:\s*flex"]),
                CheckSpec::new(
                    "even spacing with justify-content",
                    &[r"justify-content\s*:\s*(space-between|space-around|space-evenly)"],
                ),
                CheckSpec::new("align-items: center", &[r"align-items\s*:\s*center"]),
            ],
        },
    },
    ExerciseSpec {
        title: "CSS Positioning",
        description: "Learn to position elements with CSS",
        instructions: "Create a fixed header at the top and position a 'back to top' button in \
                       the bottom right corner.",
        hints: &[
            "Use position: fixed for elements that should stay in place",
            "Set top, right, bottom, or left for positioning",
            "Don't forget to use z-index for stacking order",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r##"<style>
    header {
        background: #333;
        color: white;
    }
    .back-to-top {
        padding: 10px;
    }
</style>
<header>My Site</header>
<a class="back-to-top" href="#top">Top</a>"##,
            solution: r##"<style>
    header {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 10;
        background: #333;
        color: white;
    }
    .back-to-top {
        position: fixed;
        bottom: 20px;
        right: 20px;
        padding: 10px;
    }
</style>
<header>My Site</header>
<a class="back-to-top" href="#top">Top</a>"##,
            checks: &[
                CheckSpec::new(
                    "fixed header",
                    &[r"header\s*\{[^}]*position\s*:\s*fixed[^}]*\}"],
                ),
                CheckSpec::new("header pinned to the top", &[r"header\s*\{[^}]*top\s*:\s*0[^}]*\}"]),
                CheckSpec::new(
                    "fixed back-to-top button",
                    &[r"back-to-top\s*\{[^}]*position\s*:\s*fixed[^}]*\}"],
                ),
                CheckSpec::new(
                    "back-to-top offset from the corner",
                    &[r"back-to-top\s*\{[^}]*(bottom|right)\s*:\s*\d+"],
                ),
            ],
        },
    },
    ExerciseSpec {
        title: "CSS Grid Layout",
        description: "Create a responsive grid layout",
        instructions: "Create a 2x2 grid of cards with equal spacing. Cards should stack on \
                       mobile (below 600px).",
        hints: &[
            "Use display: grid on the container",
            "Use grid-template-columns for the layout",
            "Use gap for spacing between items",
            "Use media queries for responsiveness",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    .grid {
        /* Add your grid styles here */
    }
</style>
<div class="grid">
    <div class="card">1</div>
    <div class="card">2</div>
    <div class="card">3</div>
    <div class="card">4</div>
</div>"#,
            solution: r#"<style>
    .grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 20px;
    }
    @media (max-width: 600px) {
        .grid {
            grid-template-columns: 1fr;
        }
    }
</style>
<div class="grid">
    <div class="card">1</div>
    <div class="card">2</div>
    <div class="card">3</div>
    <div class="card">4</div>
</div>"#,
            checks: &[
                CheckSpec::new("display: grid", &[r"display\s*:\s*grid"]),
                CheckSpec::new(
                    "two equal columns",
                    &[r"grid-template-columns\s*:\s*repeat\s*\(\s*2\s*,\s*1fr\s*\)"],
                ),
                CheckSpec::new(
                    "600px media query",
                    &[r"@media\s*\(\s*max-width\s*:\s*600px\s*\)"],
                ),
                CheckSpec::new("single column on mobile", &[r"grid-template-columns\s*:\s*1fr"]),
            ],
        },
    },
    ExerciseSpec {
        title: "CSS Transitions and Transforms",
        description: "Add smooth transitions and transforms to elements",
        instructions: "Create a card that scales up and changes color smoothly on hover.",
        hints: &[
            "Use transition property for smooth animations",
            "Use transform: scale() for size changes",
            "Combine multiple properties in the transition",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    .card {
        background-color: white;
        padding: 20px;
    }
</style>
<div class="card">Hover me</div>"#,
            solution: r#"<style>
    .card {
        background-color: white;
        padding: 20px;
        transition: all 0.3s ease;
    }
    .card:hover {
        transform: scale(1.05);
        background-color: #e0f2fe;
    }
</style>
<div class="card">Hover me</div>"#,
            checks: &[
                CheckSpec::new("transition: all", &[r"transition\s*:\s*all"]),
                CheckSpec::new("scale transform", &[r"transform\s*:\s*scale"]),
                CheckSpec::new("hover rule", &[r":hover\s*\{[^}]*\}"]),
                CheckSpec::new(
                    "background color change on hover",
                    &[r":hover\s*\{[^}]*background-color"],
                ),
            ],
        },
    },
];

pub(super) const ADVANCED: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "CSS Animations",
        description: "Create a complex animation sequence",
        instructions: "Create a loading spinner animation that transitions through multiple \
                       colors and rotates continuously.",
        hints: &[
            "Use @keyframes for custom animations",
            "Combine multiple animations with comma separation",
            "Use transform: rotate for spinning effect",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    .spinner {
        width: 50px;
        height: 50px;
        border: 5px solid #eee;
        border-radius: 50%;
    }
</style>
<div class="spinner"></div>"#,
            solution: r#"<style>
    .spinner {
        width: 50px;
        height: 50px;
        border: 5px solid #eee;
        border-top-color: #3498db;
        border-radius: 50%;
        animation: spin 1s linear infinite, colorChange 3s ease infinite;
    }
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    @keyframes colorChange {
        0% { border-top-color: #3498db; }
        50% { border-top-color: #e74c3c; }
        100% { border-top-color: #3498db; }
    }
</style>
<div class="spinner"></div>"#,
            checks: &[
                CheckSpec::new("spin or color keyframes", &[r"@keyframes\s+(spin|colorchange)"]),
                CheckSpec::new("animation property", &[r"animation\s*:"]),
                CheckSpec::new("full rotation", &[r"rotate\s*\(\s*360deg\s*\)"]),
                CheckSpec::new("animated border color", &[r"border-(top-)?color"]),
            ],
        },
    },
    ExerciseSpec {
        title: "CSS Custom Properties",
        description: "Create a theme switcher using CSS variables",
        instructions: "Create a light/dark theme switcher using CSS custom properties \
                       (variables). The theme should affect background, text color, and accent \
                       colors.",
        hints: &[
            "Define variables in :root selector",
            "Use var(--variable-name) to use variables",
            "Create a dark-theme class to override variables",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    body {
        background: white;
        color: black;
    }
</style>
<body>
    <button>Toggle theme</button>
</body>"#,
            solution: r#"<style>
    :root {
        --bg: #ffffff;
        --text: #111827;
        --accent: #2563eb;
    }
    .dark-theme {
        --bg: #111827;
        --text: #f9fafb;
        --accent: #60a5fa;
    }
    body {
        background: var(--bg);
        color: var(--text);
        transition: background 0.3s, color 0.3s;
    }
    button {
        background: var(--accent);
    }
</style>
<body>
    <button onclick="document.body.classList.toggle('dark-theme')">Toggle theme</button>
</body>"#,
            checks: &[
                CheckSpec::new("variables on :root", &[r":root\s*\{[^}]*--"]),
                CheckSpec::new("dark theme overrides", &[r"\.dark-theme\s*\{[^}]*--"]),
                CheckSpec::new("variables in use", &[r"var\s*\(\s*--"]),
                CheckSpec::new("theme transition", &["transition"]),
            ],
        },
    },
    ExerciseSpec {
        title: "CSS Grid Areas",
        description: "Create a complex layout using CSS Grid areas",
        instructions: "Create a responsive dashboard layout with header, sidebar, main content, \
                       and footer using CSS Grid areas. Layout should stack on mobile.",
        hints: &[
            "Use grid-template-areas for layout",
            "Define areas with grid-area property",
            "Use different template areas for mobile",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    .dashboard {
        display: grid;
    }
</style>
<div class="dashboard">
    <header>Header</header>
    <aside>Sidebar</aside>
    <main>Main</main>
    <footer>Footer</footer>
</div>"#,
            solution: r#"<style>
    .dashboard {
        display: grid;
        grid-template-columns: 200px 1fr;
        grid-template-areas:
            "header header"
            "sidebar main"
            "footer footer";
    }
    header { grid-area: header; }
    aside { grid-area: sidebar; }
    main { grid-area: main; }
    footer { grid-area: footer; }
    @media (max-width: 600px) {
        .dashboard {
            grid-template-columns: 1fr;
            grid-template-areas: "header" "sidebar" "main" "footer";
        }
    }
</style>
<div class="dashboard">
    <header>Header</header>
    <aside>Sidebar</aside>
    <main>Main</main>
    <footer>Footer</footer>
</div>"#,
            checks: &[
                CheckSpec::new("grid-template-areas", &["grid-template-areas"]),
                CheckSpec::new(
                    "named grid areas",
                    &[r"grid-area\s*:\s*(header|sidebar|main|footer)"],
                ),
                CheckSpec::new("media query", &["@media"]),
                CheckSpec::new("single column on mobile", &[r"grid-template-columns\s*:\s*1fr"]),
            ],
        },
    },
    ExerciseSpec {
        title: "CSS Clip-path and Shapes",
        description: "Create complex shapes using CSS",
        instructions: "Create an interactive button with a creative shape using clip-path and \
                       transform on hover.",
        hints: &[
            "Use clip-path with polygon() for custom shapes",
            "Combine transform properties for hover effects",
            "Use transitions for smooth shape changes",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<style>
    .shape-button {
        padding: 20px 40px;
        border: none;
    }
</style>
<button class="shape-button">Click me</button>"#,
            solution: r#"<style>
    .shape-button {
        padding: 20px 40px;
        border: none;
        background: linear-gradient(135deg, #6366f1, #ec4899);
        clip-path: polygon(10% 0, 100% 0, 90% 100%, 0 100%);
        transition: transform 0.3s ease;
    }
    .shape-button:hover {
        transform: scale(1.1) rotate(-2deg);
    }
</style>
<button class="shape-button">Click me</button>"#,
            checks: &[
                CheckSpec::new("polygon clip-path", &[r"clip-path\s*:\s*polygon"]),
                CheckSpec::new("scale transform", &[r"transform\s*:\s*scale"]),
                CheckSpec::new("hover state", &[":hover"]),
                CheckSpec::new("gradient background", &["linear-gradient"]),
            ],
        },
    },
];
