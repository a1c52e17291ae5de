use super::{DEFAULT_POINTS, ExerciseSpec, KindSpec};
use crate::predicate::CheckSpec;

pub(super) const BEGINNER: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Tailwind Flexbox Layout",
        description: "Learn Tailwind's flexbox utilities for creating layouts",
        instructions: "Create a responsive flex layout with 3 boxes that are displayed in a row \
                       on desktop and stack vertically on mobile.",
        hints: &[
            "Use flex class for flex container",
            "Use flex-col for vertical, md:flex-row for horizontal on medium screens",
            "Use gap-4 for spacing between items",
            "Use flex-1 to make items equal width",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="">
    <div class="bg-blue-200 p-4">Box 1</div>
    <div class="bg-blue-300 p-4">Box 2</div>
    <div class="bg-blue-400 p-4">Box 3</div>
</div>"#,
            solution: r#"<div class="flex flex-col md:flex-row gap-4">
    <div class="flex-1 bg-blue-200 p-4">Box 1</div>
    <div class="flex-1 bg-blue-300 p-4">Box 2</div>
    <div class="flex-1 bg-blue-400 p-4">Box 3</div>
</div>"#,
            checks: &[
                CheckSpec::new("flex container", &[r#"flex["\s]"#]),
                CheckSpec::new("column direction on mobile", &["flex-col"]),
                CheckSpec::new("gap between items", &["gap-"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Card Component",
        description: "Create a card component using Tailwind utilities",
        instructions: "Build a card with an image, title, description, and a button using \
                       Tailwind classes.",
        hints: &[
            "Use rounded-lg for border radius",
            "Use shadow-lg for shadow effect",
            "Use overflow-hidden to clip image corners",
            "Use hover: prefix for hover states",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="max-w-sm">
    <img src="card.jpg" alt="Card">
    <h2>Card title</h2>
    <p>Card description.</p>
</div>"#,
            solution: r#"<div class="max-w-sm rounded-lg shadow-lg overflow-hidden bg-white">
    <img class="w-full" src="card.jpg" alt="Card">
    <div class="p-6">
        <h2 class="text-xl font-bold mb-2">Card title</h2>
        <p class="text-gray-700 mb-4">Card description.</p>
        <button class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded">Read more</button>
    </div>
</div>"#,
            checks: &[
                CheckSpec::new("rounded corners", &["rounded-lg"]),
                CheckSpec::new("shadow", &["shadow-lg"]),
                CheckSpec::new("button", &["<button[^>]*>"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Typography",
        description: "Master Tailwind's typography and text styling utilities",
        instructions: "Create a styled text section with heading, paragraph, and emphasis using \
                       Tailwind font, size, weight, and color utilities.",
        hints: &[
            "Use text-4xl, text-2xl for different heading sizes",
            "Use font-bold, font-semibold for font weights",
            "Use text-gray-900, text-blue-600 for colors",
            "Use italic for emphasis",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<section>
    <h1>Learning Tailwind</h1>
    <p>Utility classes make styling fast.</p>
    <blockquote>This is an important quote that should stand out from regular text.</blockquote>
</section>"#,
            solution: r#"<section class="p-8">
    <h1 class="text-4xl font-bold text-gray-900">Learning Tailwind</h1>
    <p class="text-lg text-gray-600">Utility classes make styling fast.</p>
    <blockquote class="italic font-semibold text-blue-600">This is an important quote that should stand out from regular text.</blockquote>
</section>"#,
            checks: &[
                CheckSpec::new("large heading size", &["text-4xl|text-3xl|text-2xl"]),
                CheckSpec::new("font weight", &["font-bold|font-semibold"]),
                CheckSpec::new("text color", &["text-gray|text-blue"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Grid Layout",
        description: "Create responsive grids using Tailwind's grid system",
        instructions: "Build a 3-column grid that becomes 2-column on tablets and 1-column on \
                       mobile devices.",
        hints: &[
            "Use grid class for grid container",
            "Use grid-cols-1, md:grid-cols-2, lg:grid-cols-3 for responsive columns",
            "Use gap-6 for spacing between grid items",
            "Mobile-first approach: start with mobile layout",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="">
    <div class="bg-white p-4">Item 1</div>
    <div class="bg-white p-4">Item 2</div>
    <div class="bg-white p-4">Item 3</div>
</div>"#,
            solution: r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
    <div class="bg-white p-4">Item 1</div>
    <div class="bg-white p-4">Item 2</div>
    <div class="bg-white p-4">Item 3</div>
</div>"#,
            checks: &[
                CheckSpec::new("grid container", &[r#"grid["\s]"#]),
                CheckSpec::new("column count", &["grid-cols-"]),
                CheckSpec::new("breakpoint prefix", &["md:|lg:"]),
            ],
        },
    },
];

pub(super) const INTERMEDIATE: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Tailwind Dark Mode",
        description: "Master Tailwind's dark mode utilities for theme switching",
        instructions: "Create a component that shows different styles for light and dark modes \
                       using the dark: prefix.",
        hints: &[
            "Use dark: prefix to apply styles in dark mode",
            "Apply dark styles to text colors like text-gray-600 dark:text-gray-300",
            "Dark mode styles apply to background, borders, and buttons",
            "Ensure sufficient contrast in both light and dark modes",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="p-6">
    <h2 class="text-xl">Profile</h2>
    <p class="text-gray-600">Switch your system theme to test this card.</p>
</div>"#,
            solution: r#"<div class="p-6 bg-white dark:bg-gray-800 rounded-lg shadow">
    <h2 class="text-xl text-gray-900 dark:text-white">Profile</h2>
    <p class="text-gray-600 dark:text-gray-300">Switch your system theme to test this card.</p>
</div>"#,
            checks: &[
                CheckSpec::new("dark: variants", &["dark:"]),
                CheckSpec::new("themed surface", &["bg-white.*dark:bg|rounded|shadow"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Custom Spacing",
        description: "Learn to use custom spacing and padding values",
        instructions: "Create a layout with custom spacing using Tailwind's spacing scale (p-4, \
                       gap-6, etc) to create a well-balanced design.",
        hints: &[
            "Use p- prefix for padding (p-4, p-6, p-8)",
            "Use m- prefix for margin (mb-2, mb-4, mb-6)",
            "Use gap- for spacing between flex/grid items",
            "Spacing scale: 0, 1, 2, 3, 4, 6, 8, 10, 12, 14, 16...",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<section>
    <h2>Features</h2>
    <div class="flex">
        <div>Fast</div>
        <div>Simple</div>
    </div>
</section>"#,
            solution: r#"<section class="p-8">
    <h2 class="mb-4 text-2xl">Features</h2>
    <div class="flex gap-6">
        <div class="p-4 bg-gray-100">Fast</div>
        <div class="p-4 bg-gray-100">Simple</div>
    </div>
</section>"#,
            checks: &[
                CheckSpec::new("padding utility", &["p-[0-9]"]),
                CheckSpec::new("margin or gap utility", &["m[b-t]?-[0-9]", "gap-[0-9]"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Hover and Focus States",
        description: "Create interactive elements with hover and focus effects",
        instructions: "Build a form with input fields that have hover and focus states with \
                       proper styling and transitions.",
        hints: &[
            "Use hover: prefix for hover states (hover:border-blue-400)",
            "Use focus: prefix for focus states (focus:border-blue-500)",
            "Use active: prefix for active states (active:bg-blue-700)",
            "Use transition for smooth animations between states",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<form class="space-y-4">
    <!-- Add your fields here -->
</form>"#,
            solution: r#"<form class="space-y-4">
    <input type="text" placeholder="Name" class="border rounded px-3 py-2 transition hover:border-blue-400 focus:border-blue-500 focus:outline-none">
    <input type="email" placeholder="Email" class="border rounded px-3 py-2 transition hover:border-blue-400 focus:border-blue-500 focus:outline-none">
    <button class="bg-blue-600 hover:bg-blue-500 active:bg-blue-700 text-white px-4 py-2 rounded">Send</button>
</form>"#,
            checks: &[
                CheckSpec::new("hover: state", &["hover:"]),
                CheckSpec::new("focus: state", &["focus:"]),
                CheckSpec::new("input field", &["input|type="]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Gradient Backgrounds",
        description: "Create beautiful gradient backgrounds and effects",
        instructions: "Design a hero section with a gradient background and overlaid text \
                       content.",
        hints: &[
            "Use bg-gradient-to-* for gradient direction (to-r, to-b, to-t, to-l)",
            "Use from-, via-, and to- for gradient colors",
            "Use h-screen or h-64 for height sizing",
            "Use flex, items-center, justify-center for content positioning",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<section class="h-64">
    <h1 class="text-4xl text-white">Welcome</h1>
</section>"#,
            solution: r#"<section class="h-64 bg-gradient-to-r from-purple-500 via-pink-500 to-red-500 flex items-center justify-center">
    <h1 class="text-4xl font-bold text-white">Welcome</h1>
</section>"#,
            checks: &[
                CheckSpec::new("gradient direction", &["bg-gradient-to-"]),
                CheckSpec::new("gradient color stops", &["from-|to-|via-"]),
                CheckSpec::new("centered content", &["flex.*items-center|justify-center"]),
            ],
        },
    },
];

pub(super) const ADVANCED: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Tailwind Complex Layouts",
        description: "Create advanced multi-column layouts with Tailwind",
        instructions: "Build a complex dashboard layout with header, sidebar, and main content \
                       area with proper grid and responsive behavior.",
        hints: &[
            "Use flex and h-screen for full-height layout",
            "Use w-64 for fixed sidebar width",
            "Use flex-1 to make content area fill remaining space",
            "Combine grid layout with sidebar for complex designs",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="h-screen">
    <aside>Sidebar</aside>
    <main>Content</main>
</div>"#,
            solution: r#"<div class="flex h-screen">
    <aside class="w-64 bg-gray-800 text-white p-4">Sidebar</aside>
    <div class="flex-1 flex flex-col">
        <header class="h-16 bg-white shadow px-6">Header</header>
        <main class="grid grid-cols-1 md:grid-cols-3 gap-6 p-6">
            <div class="bg-white p-4 rounded">Stats</div>
            <div class="bg-white p-4 rounded">Orders</div>
            <div class="bg-white p-4 rounded">Users</div>
        </main>
    </div>
</div>"#,
            checks: &[
                CheckSpec::new("flex layout", &[r#"flex["\s]"#]),
                CheckSpec::new("grid or fixed-width sidebar", &["grid", "w-[0-9]"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Animations",
        description: "Create animations using Tailwind's animation utilities",
        instructions: "Build animated elements using Tailwind's animation utilities like \
                       animate-spin, animate-bounce, and custom animations.",
        hints: &[
            "Use animate-spin for rotating elements",
            "Use animate-bounce for bouncing motion",
            "Use animate-pulse for fading effect",
            "Combine with SVG or div elements for animated content",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="space-y-6">
    <div class="w-12 h-12 border-4 border-blue-500 rounded-full"></div>
    <div class="w-8 h-8 bg-green-500 rounded-full"></div>
</div>"#,
            solution: r#"<div class="space-y-6">
    <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin"></div>
    <div class="w-8 h-8 bg-green-500 rounded-full animate-bounce"></div>
    <div class="w-32 h-4 bg-gray-300 rounded animate-pulse"></div>
</div>"#,
            checks: &[CheckSpec::new(
                "animation utility",
                &["animate-", "animate-spin|animate-bounce|animate-pulse"],
            )],
        },
    },
    ExerciseSpec {
        title: "Tailwind Container Queries",
        description: "Use responsive design with proper container sizing",
        instructions: "Create a responsive card layout that adapts based on container width \
                       using Tailwind's responsive breakpoints effectively.",
        hints: &[
            "Use sm:, md:, lg:, xl: prefixes for breakpoints",
            "Mobile-first approach: design for mobile first",
            "Use grid-cols-1 sm:grid-cols-2 md:grid-cols-3 for responsive grids",
            "Test responsiveness at different screen sizes",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="max-w-6xl mx-auto">
    <div class="bg-white p-4">Card A</div>
    <div class="bg-white p-4">Card B</div>
    <div class="bg-white p-4">Card C</div>
</div>"#,
            solution: r#"<div class="max-w-6xl mx-auto grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4">
    <div class="bg-white p-4">Card A</div>
    <div class="bg-white p-4">Card B</div>
    <div class="bg-white p-4">Card C</div>
</div>"#,
            checks: &[
                CheckSpec::new("grid columns", &["grid-cols"]),
                CheckSpec::new("breakpoint prefixes", &["sm:|md:|lg:|xl:"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Tailwind Advanced Styling",
        description: "Master complex styling with Tailwind utilities",
        instructions: "Create a styled component with multiple layers including borders, \
                       shadows, gradients, and overlay effects.",
        hints: &[
            "Use relative and absolute positioning for layering",
            "Use backdrop-blur for glassmorphism effects",
            "Combine opacity with colors for overlay effects",
            "Use rounded-2xl and overflow-hidden for polished corners",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="w-80 h-48 rounded-2xl overflow-hidden">
    <img src="cover.jpg" alt="Cover">
    <h3>Overlay title</h3>
</div>"#,
            solution: r#"<div class="relative w-80 h-48 rounded-2xl overflow-hidden shadow-xl border border-white">
    <img src="cover.jpg" alt="Cover" class="absolute inset-0 w-full h-full object-cover">
    <div class="absolute inset-0 bg-black bg-opacity-40 backdrop-blur-sm"></div>
    <h3 class="relative p-6 text-2xl font-bold text-white">Overlay title</h3>
</div>"#,
            checks: &[
                CheckSpec::new("layer positioning", &["absolute|relative|inset"]),
                CheckSpec::new("overlay effect", &["backdrop-blur|bg-black|opacity"]),
            ],
        },
    },
];
