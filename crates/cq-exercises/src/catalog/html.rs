use super::{DEFAULT_POINTS, ExerciseSpec, KindSpec};
use crate::predicate::CheckSpec;

pub(super) const BEGINNER: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "HTML Document Type",
        description: "Understanding the basics of HTML document structure",
        instructions: "Pick the correct document type declaration.",
        hints: &["It is the very first line of every HTML5 page"],
        points: DEFAULT_POINTS,
        kind: KindSpec::MultipleChoice {
            question: "What is a correct HTML markup for the document type declaration?",
            options: &["<!DOCTYPE html>", "DOCTYPE html;", "--DOCTYPE html;"],
            answer: "<!DOCTYPE html>",
            explanation: "The correct DOCTYPE declaration for HTML5 is <!DOCTYPE html>. \
                          It must be the very first line in your HTML document.",
        },
    },
    ExerciseSpec {
        title: "HTML Basic Structure",
        description: "Learn about the essential HTML elements",
        instructions: "Pick the tags every HTML document needs.",
        hints: &["Think about the outermost element and its two children"],
        points: DEFAULT_POINTS,
        kind: KindSpec::MultipleChoice {
            question: "Which set of tags is required in a valid HTML document?",
            options: &["<html>, <head>, and <body>", "<header> and <footer>", "<div> and <span>"],
            answer: "<html>, <head>, and <body>",
            explanation: "Every HTML document requires the basic structure of <html>, <head>, \
                          and <body> tags.",
        },
    },
    ExerciseSpec {
        title: "HTML Headings",
        description: "Understanding HTML heading levels",
        instructions: "Pick the most important heading tag.",
        hints: &["Heading levels run from 1 to 6"],
        points: DEFAULT_POINTS,
        kind: KindSpec::MultipleChoice {
            question: "Which heading tag represents the most important heading in HTML?",
            options: &["<h1>", "<h6>", "<heading>"],
            answer: "<h1>",
            explanation: "<h1> is the highest level heading tag and should be used for the main \
                          heading of your page.",
        },
    },
    ExerciseSpec {
        title: "Creating a Basic Web Page",
        description: "Create a simple web page with a heading and a paragraph.",
        instructions: "Add an <h1> heading that says 'My First Web Page' and a <p> paragraph \
                       that says 'Welcome to my website!'",
        hints: &["Use <h1> tags for the main heading", "Use <p> tags for the paragraph"],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<!DOCTYPE html>
<html>
<head>
    <title>Basic Web Page</title>
</head>
<body>
    <!-- Add your code here -->

</body>
</html>"#,
            solution: r#"<!DOCTYPE html>
<html>
<head>
    <title>Basic Web Page</title>
</head>
<body>
    <h1>My First Web Page</h1>
    <p>Welcome to my website!</p>
</body>
</html>"#,
            checks: &[
                CheckSpec::new(
                    "<h1> heading 'My First Web Page'",
                    &[
                        r"<h1[^>]*>my\s*first\s*web\s*page</h1>",
                        r"<h1[^>]*>[^<]*first[^<]*web page[^<]*</h1",
                    ],
                ),
                CheckSpec::new(
                    "<p> paragraph 'Welcome to my website!'",
                    &[
                        r"<p[^>]*>welcome\s*to\s*my\s*website!?</p>",
                        r"<p[^>]*>[^<]*welcome[^<]*website[^<]*</p",
                    ],
                ),
            ],
        },
    },
];

pub(super) const INTERMEDIATE: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "HTML Tables",
        description: "Creating structured data using HTML tables",
        instructions: "Create a table with 3 rows and 3 columns showing student grades. Include \
                       table headers for 'Name', 'Subject', and 'Grade'.",
        hints: &[
            "Use <table> to create a table",
            "Use <thead> for header section and <tbody> for table content",
            "Use <tr> for table rows",
            "Use <th> for header cells and <td> for data cells",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Create your table here -->\n",
            solution: r#"<table>
    <thead>
        <tr>
            <th>Name</th>
            <th>Subject</th>
            <th>Grade</th>
        </tr>
    </thead>
    <tbody>
        <tr><td>Alice</td><td>Math</td><td>A</td></tr>
        <tr><td>Bob</td><td>Science</td><td>B</td></tr>
        <tr><td>Chen</td><td>History</td><td>A</td></tr>
    </tbody>
</table>"#,
            checks: &[
                CheckSpec::new("<table> element", &[r"<table[^>]*>.*</table>"]),
                CheckSpec::new("'Name' header", &[r"<th[^>]*>\s*name\s*</th>"]),
                CheckSpec::new("'Subject' header", &[r"<th[^>]*>\s*subject\s*</th>"]),
                CheckSpec::new("'Grade' header", &[r"<th[^>]*>\s*grade\s*</th>"]),
                CheckSpec::new("at least 3 rows", &[r"<tr[^>]*>"]).at_least(3),
                CheckSpec::new("at least 9 data cells", &[r"<td[^>]*>"]).at_least(9),
            ],
        },
    },
    ExerciseSpec {
        title: "HTML Forms",
        description: "Creating interactive forms with different input types",
        instructions: "Create a contact form with name (text), email (email), message \
                       (textarea), and a submit button.",
        hints: &[
            "Use <form> to create a form",
            "Use <label> to label your inputs",
            "Use <input type=\"text\"> for name",
            "Use <input type=\"email\"> for email",
            "Use <textarea> for the message",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Create your contact form here -->\n",
            solution: r#"<form>
    <label for="name">Name</label>
    <input type="text" id="name" name="name">
    <label for="email">Email</label>
    <input type="email" id="email" name="email">
    <label for="message">Message</label>
    <textarea id="message" name="message"></textarea>
    <button type="submit">Send</button>
</form>"#,
            checks: &[
                CheckSpec::new("<form> element", &[r"<form[^>]*>.*</form>"]),
                CheckSpec::new("text input", &[r#"<input[^>]*type=["']text["'][^>]*>"#]),
                CheckSpec::new("email input", &[r#"<input[^>]*type=["']email["'][^>]*>"#]),
                CheckSpec::new("<textarea> element", &[r"<textarea[^>]*>.*</textarea>"]),
                CheckSpec::new("at least 3 labels", &[r"<label[^>]*>"]).at_least(3),
            ],
        },
    },
    ExerciseSpec {
        title: "HTML Lists and Navigation",
        description: "Creating navigation menus with lists",
        instructions: "Create a navigation menu using an unordered list with 4 links: Home, \
                       About, Services, and Contact.",
        hints: &[
            "Use <nav> for navigation sections",
            "Use <ul> for unordered list",
            "Use <li> for list items",
            "Use <a href=\"#\"> for links",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Create your navigation menu here -->\n",
            solution: r##"<nav>
    <ul>
        <li><a href="#home">Home</a></li>
        <li><a href="#about">About</a></li>
        <li><a href="#services">Services</a></li>
        <li><a href="#contact">Contact</a></li>
    </ul>
</nav>"##,
            checks: &[
                CheckSpec::new("<nav> element", &[r"<nav[^>]*>.*</nav>"]),
                CheckSpec::new("<ul> list", &[r"<ul[^>]*>.*</ul>"]),
                CheckSpec::new("at least 4 list items", &[r"<li[^>]*>"]).at_least(4),
                CheckSpec::new("Home link", &[r##"href=["']#home["']"##]),
                CheckSpec::new("About link", &[r##"href=["']#about["']"##]),
                CheckSpec::new("Services link", &[r##"href=["']#services["']"##]),
                CheckSpec::new("Contact link", &[r##"href=["']#contact["']"##]),
            ],
        },
    },
    ExerciseSpec {
        title: "HTML Semantic Elements",
        description: "Using semantic HTML elements for better structure",
        instructions: "Create a blog post structure using semantic HTML elements including \
                       header, article, section, and footer.",
        hints: &[
            "Use <header> for the page header",
            "Use <article> for the main content",
            "Use <section> for different parts of the content",
            "Use <footer> for the page footer",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: "<!-- Create your blog post structure here -->\n",
            solution: r#"<header>
    <h1>My Blog</h1>
</header>
<article>
    <h2>First Post</h2>
    <section>
        <h3>Introduction</h3>
        <p>Semantic elements describe their content.</p>
    </section>
</article>
<footer>
    <p>Written by me</p>
</footer>"#,
            checks: &[
                CheckSpec::new("<header> element", &[r"<header[^>]*>.*</header>"]),
                CheckSpec::new("<article> element", &[r"<article[^>]*>.*</article>"]),
                CheckSpec::new("<section> element", &[r"<section[^>]*>.*</section>"]),
                CheckSpec::new("<footer> element", &[r"<footer[^>]*>.*</footer>"]),
                CheckSpec::new(
                    "a heading",
                    &[r"<h1[^>]*>.*</h1>", r"<h2[^>]*>.*</h2>", r"<h3[^>]*>.*</h3>"],
                ),
            ],
        },
    },
];
