use super::{DEFAULT_POINTS, ExerciseSpec, KindSpec};
use crate::predicate::CheckSpec;

pub(super) const BEGINNER: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Basic Function and DOM",
        description: "Functions, user input and updating the page",
        instructions: "Write JavaScript code to display a greeting message",
        hints: &[
            "Create a function named greet()",
            "Use prompt() to get user input",
            "Update the text content using getElementById()",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<button onclick="greet()">Greet me</button>
<p id="greeting"></p>
<script>
    // Write your greet function here
</script>"#,
            solution: r#"<button onclick="greet()">Greet me</button>
<p id="greeting"></p>
<script>
    function greet() {
        const name = prompt('What is your name?');
        document.getElementById('greeting').textContent = 'Hello, ' + name + '!';
    }
</script>"#,
            checks: &[
                CheckSpec::new("greet() function", &[r"function\s+greet\s*\(\s*\)"]),
                CheckSpec::new("prompt() call", &[r"prompt\s*\([^)]*\)"]),
                CheckSpec::new("textContent update", &[r"textcontent\s*="]),
            ],
        },
    },
    ExerciseSpec {
        title: "Numbers and Math",
        description: "Converting input to numbers and doing arithmetic",
        instructions: "Create a simple calculator that adds two numbers and displays the result",
        hints: &[
            "Use Number() to convert string inputs to numbers",
            "Get input values using .value property",
            "Display the sum in the result paragraph",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<input id="first" type="number">
<input id="second" type="number">
<button onclick="calculate()">Add</button>
<p id="result"></p>
<script>
    // Write your calculate function here
</script>"#,
            solution: r#"<input id="first" type="number">
<input id="second" type="number">
<button onclick="calculate()">Add</button>
<p id="result"></p>
<script>
    function calculate() {
        const a = Number(document.getElementById('first').value);
        const b = Number(document.getElementById('second').value);
        document.getElementById('result').textContent = 'Sum: ' + (a + b);
    }
</script>"#,
            checks: &[
                CheckSpec::new("calculate() function", &[r"function\s+calculate\s*\(\s*\)"]),
                CheckSpec::new("Number() conversion", &[r"number\s*\("]),
                CheckSpec::new("addition", &["[+]"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Strings and Text",
        description: "Working with strings and arrays of characters",
        instructions: "Create a text reverser that takes input and displays it backwards",
        hints: &[
            "Split the string into an array of characters",
            "Use reverse() to reverse the array",
            "Join the characters back into a string",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<input id="text">
<button onclick="reverseText()">Reverse</button>
<p id="output"></p>
<script>
    // Write your reverseText function here
</script>"#,
            solution: r#"<input id="text">
<button onclick="reverseText()">Reverse</button>
<p id="output"></p>
<script>
    function reverseText() {
        const text = document.getElementById('text').value;
        const reversed = text.split('').reverse().join('');
        document.getElementById('output').textContent = reversed;
    }
</script>"#,
            checks: &[
                CheckSpec::new("reverseText() function", &[r"function\s+reversetext\s*\(\s*\)"]),
                CheckSpec::new(
                    "split('') then reverse()",
                    &[r#"split\s*\(\s*['"]['"]\s*\).*?reverse\s*\(\s*\)"#],
                ),
                CheckSpec::new("join('')", &[r#"join\s*\(\s*['"]['"]\s*\)"#]),
            ],
        },
    },
    ExerciseSpec {
        title: "Conditionals",
        description: "Making decisions with if/else",
        instructions: "Create an age checker that tells if someone is old enough to vote (18+)",
        hints: &[
            "Use if/else statement to check age",
            "Remember to convert input to a number",
            "Display appropriate message based on age",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<input id="age" type="number">
<button onclick="checkAge()">Check</button>
<p id="message"></p>
<script>
    // Write your checkAge function here
</script>"#,
            solution: r#"<input id="age" type="number">
<button onclick="checkAge()">Check</button>
<p id="message"></p>
<script>
    function checkAge() {
        const age = Number(document.getElementById('age').value);
        const message = document.getElementById('message');
        if (age >= 18) {
            message.textContent = 'You can vote!';
        } else {
            message.textContent = 'Too young to vote.';
        }
    }
</script>"#,
            checks: &[
                CheckSpec::new("checkAge() function", &[r"function\s+checkage\s*\(\s*\)"]),
                CheckSpec::new("if statement", &[r"if\s*\([^)]*\)"]),
                CheckSpec::new("compare against 18", &[r">=[^=]?\s*18"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Arrays and Loops",
        description: "Repeating work with loops and building DOM nodes",
        instructions: "Create a number list generator that creates a list of numbers from 1 to N",
        hints: &[
            "Use a for loop to count from 1 to N",
            "Create li elements using createElement",
            "Append each number as a list item",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<input id="count" type="number">
<button onclick="generateList()">Generate</button>
<ul id="list"></ul>
<script>
    // Write your generateList function here
</script>"#,
            solution: r#"<input id="count" type="number">
<button onclick="generateList()">Generate</button>
<ul id="list"></ul>
<script>
    function generateList() {
        const n = Number(document.getElementById('count').value);
        const list = document.getElementById('list');
        list.innerHTML = '';
        for (let i = 1; i <= n; i++) {
            const item = document.createElement('li');
            item.textContent = i;
            list.appendChild(item);
        }
    }
</script>"#,
            checks: &[
                CheckSpec::new("generateList() function", &[r"function\s+generatelist\s*\(\s*\)"]),
                CheckSpec::new("for loop", &[r"for\s*\([^)]*\)"]),
                CheckSpec::new("appendChild() call", &[r"appendchild\s*\("]),
            ],
        },
    },
];

pub(super) const INTERMEDIATE: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Array Methods",
        description: "Transforming data with filter and map",
        instructions: "Create a function that filters numbers from an array and doubles them",
        hints: &[
            "Use filter() to keep only items that can be converted to numbers",
            "Use map() to transform the filtered items",
            "Use Number() to convert strings to numbers",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<script>
    const items = ['1', 'apple', '2', 'banana', '3'];
    // Keep the numeric items and double them
</script>"#,
            solution: r#"<script>
    const items = ['1', 'apple', '2', 'banana', '3'];
    function doubleNumbers(values) {
        return values
            .filter(value => !isNaN(Number(value)))
            .map(value => Number(value) * 2);
    }
    console.log(doubleNumbers(items));
</script>"#,
            checks: &[
                CheckSpec::new("filter() call", &[r"filter\s*\("]),
                CheckSpec::new("map() call", &[r"map\s*\("]),
                CheckSpec::new("Number() conversion", &[r"number\s*\("]),
            ],
        },
    },
    ExerciseSpec {
        title: "Object Methods",
        description: "Classes, constructors and instance methods",
        instructions: "Create a Person class with methods to get full name and age",
        hints: &[
            "Use constructor() to initialize properties",
            "Use this keyword to access instance properties",
            "Create methods using the class syntax",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<p id="output"></p>
<script>
    // Define your Person class here
</script>"#,
            solution: r#"<p id="output"></p>
<script>
    class Person {
        constructor(firstName, lastName, birthYear) {
            this.firstName = firstName;
            this.lastName = lastName;
            this.birthYear = birthYear;
        }
        getFullName() {
            return this.firstName + ' ' + this.lastName;
        }
        getAge() {
            return new Date().getFullYear() - this.birthYear;
        }
    }
    const person = new Person('Ada', 'Lovelace', 1815);
    document.getElementById('output').textContent = person.getFullName();
</script>"#,
            checks: &[
                CheckSpec::new("Person instance", &[r"new\s+person"]),
                CheckSpec::new("getFullName() call", &[r"person\.getfullname"]),
                CheckSpec::new("instance properties", &[r"this\."]),
            ],
        },
    },
    ExerciseSpec {
        title: "Event Handlers",
        description: "Reacting to user events",
        instructions: "Create a form with multiple event handlers",
        hints: &[
            "Use addEventListener for each event",
            "Remember to prevent form submission default behavior",
            "Update status message based on different events",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<form id="signup">
    <input id="name">
    <button type="submit">Submit</button>
</form>
<p id="status"></p>
<script>
    // Attach your event handlers here
</script>"#,
            solution: r#"<form id="signup">
    <input id="name">
    <button type="submit">Submit</button>
</form>
<p id="status"></p>
<script>
    const form = document.getElementById('signup');
    const input = document.getElementById('name');
    const status = document.getElementById('status');
    input.addEventListener('focus', () => {
        status.textContent = 'Typing...';
    });
    form.addEventListener('submit', event => {
        event.preventDefault();
        status.textContent = 'Submitted ' + input.value;
    });
</script>"#,
            checks: &[
                CheckSpec::new("event listener", &["addeventlistener"]),
                CheckSpec::new("preventDefault() call", &["preventdefault"]),
                CheckSpec::new("at least 2 event listeners", &["addeventlistener"]).at_least(2),
            ],
        },
    },
    ExerciseSpec {
        title: "Form Validation",
        description: "Validating user input before submission",
        instructions: "Create a registration form with email and password validation",
        hints: &[
            "Check email format using string methods",
            "Validate password length and complexity",
            "Show error messages for invalid fields",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<form id="register">
    <input id="email" type="text">
    <input id="password" type="password">
    <button type="submit">Register</button>
</form>
<p id="error"></p>
<script>
    // Validate the form here
</script>"#,
            solution: r#"<form id="register">
    <input id="email" type="text">
    <input id="password" type="password">
    <button type="submit">Register</button>
</form>
<p id="error"></p>
<script>
    document.getElementById('register').addEventListener('submit', event => {
        event.preventDefault();
        const email = document.getElementById('email').value;
        const password = document.getElementById('password').value;
        const error = document.getElementById('error');
        if (!email.includes('@')) {
            error.textContent = 'Please enter a valid email';
        } else if (password.length < 8) {
            error.textContent = 'Password must be at least 8 characters';
        } else {
            error.textContent = '';
        }
    });
</script>"#,
            checks: &[
                CheckSpec::new("email check", &["email.*?@"]),
                CheckSpec::new("password length check", &["password.*?length"]),
                CheckSpec::new("error message", &["error.*?textcontent"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Local Storage",
        description: "Persisting data in the browser",
        instructions: "Create a note-taking app that saves notes to localStorage",
        hints: &[
            "Use localStorage.setItem() to save notes",
            "Use localStorage.getItem() to retrieve notes",
            "Use JSON.parse() and JSON.stringify() for storage",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<textarea id="note"></textarea>
<button onclick="saveNote()">Save</button>
<ul id="notes"></ul>
<script>
    // Save and load notes here
</script>"#,
            solution: r#"<textarea id="note"></textarea>
<button onclick="saveNote()">Save</button>
<ul id="notes"></ul>
<script>
    function loadNotes() {
        return JSON.parse(localStorage.getItem('notes') || '[]');
    }
    function saveNote() {
        const notes = loadNotes();
        notes.push(document.getElementById('note').value);
        localStorage.setItem('notes', JSON.stringify(notes));
    }
</script>"#,
            checks: &[
                CheckSpec::new("localStorage.setItem()", &["setitem"]),
                CheckSpec::new("localStorage.getItem()", &["getitem"]),
                CheckSpec::new("JSON.parse()", &[r"json\.parse"]),
            ],
        },
    },
];

pub(super) const ADVANCED: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Async/Await and API Calls",
        description: "Fetching remote data with async functions",
        instructions: "Create a function that fetches user data from an API using async/await",
        hints: &[
            "Use async/await for API calls",
            "Handle response with try/catch",
            "Show loading and error states",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<div id="user">Loading...</div>
<script>
    // Fetch https://jsonplaceholder.typicode.com/users/1 here
</script>"#,
            solution: r#"<div id="user">Loading...</div>
<script>
    async function loadUser() {
        const target = document.getElementById('user');
        try {
            const response = await fetch('https://jsonplaceholder.typicode.com/users/1');
            const user = await response.json();
            target.textContent = user.name;
        } catch (error) {
            target.textContent = 'Failed to load user';
        }
    }
    loadUser();
</script>"#,
            checks: &[
                CheckSpec::new("async function", &[r"async\s+function"]),
                CheckSpec::new("awaited fetch", &[r"await\s+fetch"]),
                CheckSpec::new("try/catch", &[r"try\s*\{.*?\}\s*catch"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Promise Chaining",
        description: "Sequencing asynchronous work with promises",
        instructions: "Create multiple promises that depend on each other's results",
        hints: &[
            "Use .then() for promise chaining",
            "Pass values through the chain",
            "Add error handling with .catch()",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<p id="output"></p>
<script>
    // Chain your promises here
</script>"#,
            solution: r#"<p id="output"></p>
<script>
    Promise.resolve(2)
        .then(value => value * 10)
        .then(value => {
            document.getElementById('output').textContent = 'Result: ' + value;
        })
        .catch(error => console.error(error));
</script>"#,
            checks: &[
                CheckSpec::new("chained then() calls", &[r"\.then\s*\(.*?\).*?\.then\s*\("]),
                CheckSpec::new("catch() handler", &[r"\.catch\s*\("]),
                CheckSpec::new(
                    "promise source",
                    &[r"promise\.(resolve|all|race)|(string\(.*?\)\.split)"],
                ),
            ],
        },
    },
    ExerciseSpec {
        title: "Drag and Drop Interface",
        description: "Reordering items with the drag and drop API",
        instructions: "Create a drag and drop interface for reordering items",
        hints: &[
            "Use draggable attribute and drag events",
            "Handle dragover to allow drops",
            "Use insertBefore for reordering",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<ul id="items">
    <li>First</li>
    <li>Second</li>
    <li>Third</li>
</ul>
<script>
    // Make the items reorderable here
</script>"#,
            solution: r#"<ul id="items">
    <li draggable="true">First</li>
    <li draggable="true">Second</li>
    <li draggable="true">Third</li>
</ul>
<script>
    const list = document.getElementById('items');
    let dragged = null;
    list.addEventListener('dragstart', event => {
        dragged = event.target;
    });
    list.addEventListener('dragover', event => {
        event.preventDefault();
    });
    list.addEventListener('drop', event => {
        event.preventDefault();
        if (event.target.tagName === 'LI' && dragged) {
            list.insertBefore(dragged, event.target);
        }
    });
</script>"#,
            checks: &[
                CheckSpec::new(
                    "draggable items",
                    &[r#"draggable\s*=\s*["']?true|setattribute\s*\(\s*["']draggable"#],
                ),
                CheckSpec::new(
                    "drag event listener",
                    &[r#"addeventlistener\s*\(\s*["']drag(start|over|drop)"#],
                ),
                CheckSpec::new("preventDefault() call", &["preventdefault"]),
            ],
        },
    },
    ExerciseSpec {
        title: "Object-Oriented Programming",
        description: "Modelling a hierarchy with classes",
        instructions: "Create a shape hierarchy with inheritance",
        hints: &[
            "Create base Shape class with common properties",
            "Use extends for inheritance",
            "Call super() in child constructors",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<p id="output"></p>
<script>
    // Build your shape classes here
</script>"#,
            solution: r#"<p id="output"></p>
<script>
    class Shape {
        constructor(name) {
            this.name = name;
        }
        area() {
            return 0;
        }
    }
    class Circle extends Shape {
        constructor(radius) {
            super('circle');
            this.radius = radius;
        }
        area() {
            return Math.PI * this.radius ** 2;
        }
    }
    document.getElementById('output').textContent = new Circle(2).area().toFixed(2);
</script>"#,
            checks: &[
                CheckSpec::new("Shape base class", &[r"class\s+shape"]),
                CheckSpec::new("subclass of Shape", &[r"extends\s+shape"]),
                CheckSpec::new("super() call", &[r"super\s*\("]),
            ],
        },
    },
    ExerciseSpec {
        title: "Custom Error Handling",
        description: "Defining and handling your own error types",
        instructions: "Create custom error types and validation system",
        hints: &[
            "Create custom error classes with inheritance",
            "Use descriptive error messages",
            "Handle different error types separately",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<p id="output"></p>
<script>
    // Define your validation errors here
</script>"#,
            solution: r#"<p id="output"></p>
<script>
    class ValidationError extends Error {
        constructor(field, message) {
            super(message);
            this.name = 'ValidationError';
            this.field = field;
        }
    }
    function validateAge(age) {
        if (age < 0) {
            throw new ValidationError('age', 'Age cannot be negative');
        }
        return age;
    }
    try {
        validateAge(-1);
    } catch (error) {
        document.getElementById('output').textContent = error.field + ': ' + error.message;
    }
</script>"#,
            checks: &[
                CheckSpec::new("custom error class", &["class.*?error"]),
                CheckSpec::new("thrown error", &[r"throw\s+new"]),
                CheckSpec::new("catch block", &[r"catch\s*\(.*?\)\s*\{"]),
            ],
        },
    },
];
