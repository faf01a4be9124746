//! Word pools backing the text generators.

pub(crate) const LAST_NAMES: &[&str] = &[
    "Anderson",
    "Baker",
    "Carter",
    "Dalton",
    "Ellis",
    "Fischer",
    "Garcia",
    "Hughes",
    "Iverson",
    "Jensen",
    "Keller",
    "Lambert",
    "Morales",
    "Nguyen",
    "Olsen",
    "Patel",
    "Quinn",
    "Reyes",
    "Sato",
    "Turner",
    "Underwood",
    "Vargas",
    "Walsh",
    "Xu",
    "Young",
    "Zimmerman",
    "Brooks",
    "Chen",
    "Foster",
    "Hayes",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "alice", "ben", "carla", "david", "elena", "farid", "grace", "hiro", "ines", "jamal", "kate",
    "liam", "maya", "noah", "olivia", "pedro", "rosa", "sam", "tara", "victor",
];

pub(crate) const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Ltd", "Group", "PLC", "and Sons", "Holdings", "Partners",
];

pub(crate) const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "corp.test",
];

pub(crate) const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Elm", "Pine", "Willow", "Lake", "Hill", "River", "Park", "Sunset",
    "Highland", "Meadow", "Forest", "Harbor",
];

pub(crate) const STREET_SUFFIXES: &[&str] = &[
    "Street",
    "Avenue",
    "Road",
    "Lane",
    "Drive",
    "Court",
    "Boulevard",
    "Way",
];

pub(crate) const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Greenville",
    "Madison",
    "Georgetown",
    "Clinton",
    "Salem",
    "Franklin",
    "Ashland",
];

pub(crate) const STATES: &[&str] = &[
    "AL", "AZ", "CA", "CO", "FL", "GA", "IL", "MA", "MN", "NY", "OH", "OR", "TX", "WA",
];

pub(crate) const PHONE_FORMATS: &[&str] = &[
    "(###) ###-####",
    "###-###-####",
    "###.###.####",
    "+1-###-###-####",
    "###-###-####x###",
];

pub(crate) const LOREM: &[&str] = &[
    "a",
    "ab",
    "accusamus",
    "ad",
    "adipisci",
    "alias",
    "aliquam",
    "aliquid",
    "amet",
    "animi",
    "aperiam",
    "architecto",
    "asperiores",
    "aspernatur",
    "assumenda",
    "at",
    "atque",
    "aut",
    "autem",
    "beatae",
    "blanditiis",
    "commodi",
    "consequatur",
    "corporis",
    "corrupti",
    "culpa",
    "cum",
    "cumque",
    "cupiditate",
    "debitis",
    "delectus",
    "deleniti",
    "deserunt",
    "dicta",
    "dignissimos",
    "distinctio",
    "dolor",
    "dolore",
    "dolorem",
    "doloremque",
    "dolores",
    "doloribus",
    "dolorum",
    "ducimus",
    "ea",
    "eaque",
    "earum",
    "eius",
    "eligendi",
    "enim",
    "eos",
    "error",
    "esse",
    "est",
    "et",
    "eum",
    "eveniet",
    "ex",
    "excepturi",
    "exercitationem",
    "expedita",
    "explicabo",
    "facere",
    "facilis",
    "fuga",
    "fugiat",
    "fugit",
    "harum",
    "hic",
    "id",
    "illo",
    "illum",
    "impedit",
    "in",
    "incidunt",
    "inventore",
    "ipsa",
    "ipsam",
    "ipsum",
    "iste",
    "itaque",
    "iure",
    "iusto",
    "labore",
    "laboriosam",
    "laborum",
    "laudantium",
    "libero",
    "magnam",
    "magni",
    "maiores",
    "maxime",
    "minima",
    "minus",
    "modi",
    "molestiae",
    "molestias",
    "mollitia",
    "nam",
    "natus",
    "necessitatibus",
    "nemo",
    "neque",
    "nesciunt",
    "nihil",
    "nisi",
    "nobis",
    "non",
    "nostrum",
    "nulla",
    "numquam",
    "obcaecati",
    "odio",
    "odit",
    "officia",
    "officiis",
    "omnis",
    "optio",
    "pariatur",
    "perferendis",
    "perspiciatis",
    "placeat",
    "porro",
    "possimus",
    "praesentium",
    "provident",
    "quae",
    "quaerat",
    "quam",
    "quas",
    "quasi",
    "qui",
    "quia",
    "quibusdam",
    "quidem",
    "quis",
    "quisquam",
    "quo",
    "quod",
    "quos",
    "ratione",
    "recusandae",
    "reiciendis",
    "rem",
    "repellat",
    "repellendus",
    "reprehenderit",
    "repudiandae",
    "rerum",
    "saepe",
    "sapiente",
    "sed",
    "sequi",
    "similique",
    "sint",
    "sit",
    "soluta",
    "sunt",
    "suscipit",
    "tempora",
    "tempore",
    "temporibus",
    "tenetur",
    "totam",
    "ullam",
    "unde",
    "ut",
    "vel",
    "velit",
    "veniam",
    "veritatis",
    "vero",
    "vitae",
    "voluptas",
    "voluptate",
    "voluptatem",
    "voluptates",
    "voluptatibus",
    "voluptatum",
];
