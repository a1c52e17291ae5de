use super::{DEFAULT_POINTS, ExerciseSpec, KindSpec};
use crate::predicate::CheckSpec;

pub(super) const BEGINNER: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Bootstrap Grid System",
        description: "Learn how to create responsive layouts using Bootstrap's grid system",
        instructions: "Create a responsive 3-column layout that stacks on mobile (1 column), \
                       tablet (2 columns), and desktop (3 columns) using Bootstrap grid classes.",
        hints: &[
            "Use row class for each row container",
            "Use col-12, col-md-6, col-lg-4 for responsive columns",
            "Bootstrap uses a 12-column grid system",
            "Add mb-3 class for bottom margin on cards",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="container">
    <!-- Create your responsive columns here -->
</div>"#,
            solution: r#"<div class="container">
    <div class="row">
        <div class="col-12 col-md-6 col-lg-4">
            <div class="card mb-3"><div class="card-body">Column 1</div></div>
        </div>
        <div class="col-12 col-md-6 col-lg-4">
            <div class="card"><div class="card-body">Column 2</div></div>
        </div>
        <div class="col-12 col-md-6 col-lg-4">
            <div class="card"><div class="card-body">Column 3</div></div>
        </div>
    </div>
</div>"#,
            checks: &[
                CheckSpec::new("row container", &[r#"<div[^>]*class="row"[^>]*>"#]),
                CheckSpec::new("responsive columns", &["col-12|col-md|col-lg"]),
                CheckSpec::new("card", &[r#"<div[^>]*class="card"[^>]*>"#]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Navigation Bar",
        description: "Create a responsive navigation bar using Bootstrap components",
        instructions: "Build a responsive navbar with a brand/logo, navigation links, and a \
                       mobile toggle button using Bootstrap navbar component.",
        hints: &[
            "Use navbar-expand-lg for responsive navbar",
            "navbar-toggler shows on mobile sizes",
            "data-bs-toggle and data-bs-target are required for toggler",
            "Use navbar-nav class for navigation lists",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Build your navbar here -->\n",
            solution: r##"<nav class="navbar navbar-expand-lg navbar-light bg-light">
    <div class="container-fluid">
        <a class="navbar-brand" href="#">Brand</a>
        <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#mainNav">
            <span class="navbar-toggler-icon"></span>
        </button>
        <div class="collapse navbar-collapse" id="mainNav">
            <ul class="navbar-nav">
                <li class="nav-item"><a class="nav-link" href="#">Home</a></li>
                <li class="nav-item"><a class="nav-link" href="#">About</a></li>
                <li class="nav-item"><a class="nav-link" href="#">Contact</a></li>
            </ul>
        </div>
    </div>
</nav>"##,
            checks: &[
                CheckSpec::new("navbar", &[r#"<nav[^>]*class="navbar[^>]*>"#]),
                CheckSpec::new("mobile toggler", &["navbar-toggler"]),
                CheckSpec::new("navigation list", &["navbar-nav"]),
                CheckSpec::new("nav links", &[r#"<a[^>]*class="nav-link"[^>]*>"#]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Forms",
        description: "Create a styled form using Bootstrap form components",
        instructions: "Build a contact form with text input, email input, textarea, and a \
                       submit button using Bootstrap form styling.",
        hints: &[
            "Use form-control class for inputs",
            "Use form-label class for labels",
            "Use btn btn-primary for buttons",
            "Use col and row classes for layout",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Build your contact form here -->\n",
            solution: r#"<form>
    <div class="mb-3">
        <label for="name" class="form-label">Name</label>
        <input type="text" class="form-control" id="name">
    </div>
    <div class="mb-3">
        <label for="email" class="form-label">Email</label>
        <input type="email" class="form-control" id="email">
    </div>
    <div class="mb-3">
        <label for="message" class="form-label">Message</label>
        <textarea class="form-control" id="message" rows="3"></textarea>
    </div>
    <button type="submit" class="btn btn-primary">Send</button>
</form>"#,
            checks: &[
                CheckSpec::new("form", &["<form[^>]*>"]),
                CheckSpec::new("form-control inputs", &["form-control"]),
                CheckSpec::new("form-label labels", &["form-label"]),
                CheckSpec::new("primary button", &["btn btn-primary"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Cards and Modal",
        description: "Create cards and a modal using Bootstrap components",
        instructions: "Create a card with an image, title, description, and a button that opens \
                       a modal dialog with more information.",
        hints: &[
            "Use card class with card-body for structure",
            "Use data-bs-toggle='modal' for modal trigger",
            "Modal needs id attribute to target it",
            "Include Bootstrap JS bundle for modal functionality",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Build your card and modal here -->\n",
            solution: r##"<div class="card" style="width: 18rem;">
    <img src="photo.jpg" class="card-img-top" alt="Photo">
    <div class="card-body">
        <h5 class="card-title">Card title</h5>
        <p class="card-text">A short description.</p>
        <button type="button" class="btn btn-primary" data-bs-toggle="modal" data-bs-target="#infoModal">
            More info
        </button>
    </div>
</div>
<div class="modal fade" id="infoModal" tabindex="-1">
    <div class="modal-dialog">
        <div class="modal-content">
            <div class="modal-body">More information.</div>
        </div>
    </div>
</div>"##,
            checks: &[
                CheckSpec::new("card", &[r#"<div[^>]*class="card"[^>]*>"#]),
                CheckSpec::new("modal", &[r#"<div[^>]*class="modal"#]),
                CheckSpec::new("modal dialog", &["modal-dialog"]),
                CheckSpec::new("modal trigger", &[r#"data-bs-toggle="modal""#]),
            ],
        },
    },
];

pub(super) const INTERMEDIATE: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Bootstrap Responsive Grid System",
        description: "Master Bootstrap's advanced grid capabilities",
        instructions: "Create a responsive 12-column grid layout that displays 4 columns on \
                       desktop, 2 on tablets, and 1 on mobile using col-md and col-lg classes.",
        hints: &[
            "Use col-12 for full width on mobile",
            "Use col-sm-6 for 2 columns on tablets",
            "Use col-md-6 or col-lg-3 for different breakpoints",
            "Use g-4 for gap/gutter between columns",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div class="container">
    <div class="row">
        <!-- Add your columns here -->
    </div>
</div>"#,
            solution: r#"<div class="container">
    <div class="row g-4">
        <div class="col-12 col-md-6 col-lg-3"><div class="p-3 border">One</div></div>
        <div class="col-12 col-md-6 col-lg-3"><div class="p-3 border">Two</div></div>
        <div class="col-12 col-md-6 col-lg-3"><div class="p-3 border">Three</div></div>
        <div class="col-12 col-md-6 col-lg-3"><div class="p-3 border">Four</div></div>
    </div>
</div>"#,
            checks: &[
                CheckSpec::new("sized columns", &["col-[a-z]*-[0-9]"]),
                CheckSpec::new("breakpoint columns", &["col-lg|col-md|col-sm"]),
                CheckSpec::new("gutter", &["g-[0-9]"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Dropdown Menu",
        description: "Create interactive dropdown menus with Bootstrap",
        instructions: "Build a navbar with a dropdown menu that shows submenu items when clicked \
                       or hovered.",
        hints: &[
            "Use dropdown class with dropdown-toggle",
            "Use dropdown-menu for submenu items",
            "Use dropdown-divider for separators",
            "Require bootstrap.bundle.min.js for dropdown functionality",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<nav class="navbar navbar-expand-lg bg-light">
    <!-- Add your menu here -->
</nav>"#,
            solution: r##"<nav class="navbar navbar-expand-lg bg-light">
    <ul class="navbar-nav">
        <li class="nav-item dropdown">
            <a class="nav-link dropdown-toggle" href="#" role="button" data-bs-toggle="dropdown">Products</a>
            <ul class="dropdown-menu">
                <li><a class="dropdown-item" href="#">Laptops</a></li>
                <li><hr class="dropdown-divider"></li>
                <li><a class="dropdown-item" href="#">Phones</a></li>
            </ul>
        </li>
    </ul>
</nav>"##,
            checks: &[
                CheckSpec::new("dropdown", &["dropdown"]),
                CheckSpec::new("dropdown menu", &["dropdown-menu"]),
                CheckSpec::new("dropdown toggle", &["dropdown-toggle|data-bs-toggle"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Form Validation",
        description: "Implement form validation with Bootstrap classes",
        instructions: "Create a form with validation using Bootstrap's is-valid and is-invalid \
                       classes with feedback messages.",
        hints: &[
            "Use is-valid class for valid inputs with green border",
            "Use is-invalid class for invalid inputs with red border",
            "Add valid-feedback div for success messages",
            "Add invalid-feedback div for error messages",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<form>\n    <!-- Add your validated fields here -->\n</form>\n",
            solution: r#"<form>
    <div class="mb-3">
        <label for="username" class="form-label">Username</label>
        <input type="text" class="form-control is-valid" id="username" value="learner">
        <div class="valid-feedback">Looks good!</div>
    </div>
    <div class="mb-3">
        <label for="email" class="form-label">Email</label>
        <input type="email" class="form-control is-invalid" id="email">
        <div class="invalid-feedback">Please enter a valid email.</div>
    </div>
</form>"#,
            checks: &[
                CheckSpec::new("validation state", &["is-valid|is-invalid"]),
                CheckSpec::new("feedback message", &["valid-feedback|invalid-feedback"]),
                CheckSpec::new("styled inputs", &["form-control|form-label"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Modal with Transitions",
        description: "Create animated modals with backdrop and animations",
        instructions: "Build a modal dialog with header, body, footer, and animations that \
                       opens/closes with fade effect.",
        hints: &[
            "Use modal fade for fade animation",
            "Use modal-header, modal-body, modal-footer",
            "Use data-bs-toggle and data-bs-target to trigger modal",
            "Use btn-close for close button in header",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<button type="button" class="btn btn-primary">Open</button>
<!-- Add your modal here -->"#,
            solution: r##"<button type="button" class="btn btn-primary" data-bs-toggle="modal" data-bs-target="#demoModal">Open</button>
<div class="modal fade" id="demoModal" tabindex="-1">
    <div class="modal-dialog">
        <div class="modal-content">
            <div class="modal-header">
                <h5 class="modal-title">Hello</h5>
                <button type="button" class="btn-close" data-bs-dismiss="modal"></button>
            </div>
            <div class="modal-body">This modal fades in and out.</div>
            <div class="modal-footer">
                <button type="button" class="btn btn-secondary" data-bs-dismiss="modal">Close</button>
            </div>
        </div>
    </div>
</div>"##,
            checks: &[
                CheckSpec::new("modal", &[r#"modal["\s]"#]),
                CheckSpec::new("fade animation", &["modal fade"]),
                CheckSpec::new("modal sections", &["modal-body|modal-header|modal-footer"]),
            ],
        },
    },
];

pub(super) const ADVANCED: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Bootstrap Carousel Component",
        description: "Create an image carousel with navigation controls",
        instructions: "Build a Bootstrap carousel with previous/next buttons, indicators, and \
                       auto-play functionality.",
        hints: &[
            "Use carousel class with id and data-bs-ride",
            "Use carousel-indicators for dot navigation",
            "Use carousel-item for each slide with active class on first",
            "Use carousel-control-prev/next for arrow buttons",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Build your carousel here -->\n",
            solution: r##"<div id="gallery" class="carousel slide" data-bs-ride="carousel">
    <div class="carousel-indicators">
        <button type="button" data-bs-target="#gallery" data-bs-slide-to="0" class="active"></button>
        <button type="button" data-bs-target="#gallery" data-bs-slide-to="1"></button>
    </div>
    <div class="carousel-inner">
        <div class="carousel-item active"><img src="one.jpg" class="d-block w-100" alt="One"></div>
        <div class="carousel-item"><img src="two.jpg" class="d-block w-100" alt="Two"></div>
    </div>
    <button class="carousel-control-prev" type="button" data-bs-target="#gallery" data-bs-slide="prev">
        <span class="carousel-control-prev-icon"></span>
    </button>
    <button class="carousel-control-next" type="button" data-bs-target="#gallery" data-bs-slide="next">
        <span class="carousel-control-next-icon"></span>
    </button>
</div>"##,
            checks: &[
                CheckSpec::new("carousel", &[r#"carousel["\s]"#]),
                CheckSpec::new("carousel navigation", &["carousel-control|carousel-indicators"]),
                CheckSpec::new("carousel slides", &["carousel-item"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Progress Bars and Badges",
        description: "Create progress indicators and status badges",
        instructions: "Build a layout with multiple progress bars at different completion \
                       levels and various badge styles.",
        hints: &[
            "Use progress class with progress-bar inside",
            "Set width with inline style for progress amount",
            "Use bg-success, bg-info, bg-warning for colors",
            "Use badge class with bg-* for different styles",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Add your progress bars and badges here -->\n",
            solution: r#"<div class="progress mb-3">
    <div class="progress-bar bg-success" style="width: 75%">75%</div>
</div>
<div class="progress mb-3">
    <div class="progress-bar bg-warning" style="width: 40%">40%</div>
</div>
<span class="badge bg-primary">New</span>
<span class="badge bg-danger">Hot</span>"#,
            checks: &[
                CheckSpec::new("progress container", &[r#"progress["\s]"#]),
                CheckSpec::new("progress bar", &["progress-bar"]),
                CheckSpec::new("badge", &["badge"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Responsive Table",
        description: "Create responsive data tables with Bootstrap styling",
        instructions: "Build a responsive table that scrolls horizontally on mobile and includes \
                       striped rows, hover effects, and different color themes.",
        hints: &[
            "Use table-responsive div to make table scrollable",
            "Use table-striped for alternating row colors",
            "Use table-hover for row highlighting on hover",
            "Use table-dark for header background",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Build your table here -->\n",
            solution: r#"<div class="table-responsive">
    <table class="table table-striped table-hover">
        <thead class="table-dark">
            <tr><th>Name</th><th>Role</th></tr>
        </thead>
        <tbody>
            <tr><td>Ada</td><td>Engineer</td></tr>
            <tr><td>Grace</td><td>Admiral</td></tr>
        </tbody>
    </table>
</div>"#,
            checks: &[
                CheckSpec::new("table", &[r#"table["\s]"#]),
                CheckSpec::new("responsive wrapper", &["table-responsive"]),
                CheckSpec::new("striped or hover rows", &["table-striped|table-hover"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Bootstrap Alert and Toast Notifications",
        description: "Create alerts and toast notifications for user feedback",
        instructions: "Build various alert types (success, warning, danger, info) and toast \
                       notifications with dismiss buttons.",
        hints: &[
            "Use alert class with alert-success, alert-warning, alert-danger",
            "Use alert-dismissible fade show for dismissible alerts",
            "Use btn-close with data-bs-dismiss for close button",
            "Use toast class for notification containers",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Add your alerts and toasts here -->\n",
            solution: r#"<div class="alert alert-success alert-dismissible fade show" role="alert">
    Saved successfully.
    <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
</div>
<div class="alert alert-warning" role="alert">Check your input.</div>
<div class="toast show" role="status">
    <div class="toast-body">You have a new message.</div>
</div>"#,
            checks: &[
                CheckSpec::new("alert", &[r#"alert["\s]"#]),
                CheckSpec::new("alert variant", &["alert-success|alert-warning|alert-danger"]),
                CheckSpec::new("dismiss button", &["alert-dismissible|btn-close"]),
            ],
        },
    },
];
