pub(super) const ADDRESSES: &[&str] = &[
    "1234 Oak Street, Springfield",
    "5678 Maple Ave, Springfield",
    "9012 Pine Road, Springfield",
    "3456 Elm Street, Springfield",
    "7890 Birch Lane, Springfield",
    "2345 Cedar Drive, Springfield",
    "6789 Willow Way, Springfield",
    "1234 Spruce Court, Springfield",
    "5678 Ash Boulevard, Springfield",
    "9012 Hickory Circle, Springfield",
];

pub(super) const EMERGENCY_MESSAGES: &[&str] = &[
    "Water leaking into living room, need immediate repair",
    "Storm damage from last night, roof is leaking badly",
    "Tree fell on roof, emergency situation",
    "Heavy rain coming through ceiling, urgent",
    "Roof shingles blown off in storm, exposed roof",
    "Water damage getting worse, need emergency fix",
    "Ice dam causing water to leak inside",
    "Wind damage - roof tiles missing",
    "Leak getting worse, furniture getting damaged",
    "Emergency roof repair needed ASAP",
];

pub(super) const STANDARD_MESSAGES: &[&str] = &[
    "Looking for roof replacement quote",
    "Need routine roof inspection",
    "Interested in roof maintenance",
    "Looking to replace old shingles",
    "Want to get quote for new roof",
    "Need roof repair estimate",
    "Thinking about roof upgrade",
    "Looking for roof cleaning service",
    "Need advice on roof materials",
    "Want to schedule consultation",
];

pub(super) const HOMEOWNER_NAMES: &[&str] = &[
    "Michael Johnson",
    "Sarah Williams",
    "David Brown",
    "Jennifer Davis",
    "Robert Miller",
    "Lisa Anderson",
    "James Martinez",
    "Patricia Taylor",
    "John Thomas",
    "Maria Garcia",
    "William Jackson",
    "Nancy White",
    "Richard Harris",
    "Betty Martin",
    "Joseph Thompson",
    "Sandra Moore",
    "Thomas Clark",
    "Margaret Lewis",
    "Charles Walker",
    "Dorothy Hall",
    "Christopher Young",
    "Sharon King",
    "Daniel Wright",
    "Carol Lopez",
    "Matthew Hill",
    "Donna Scott",
    "Anthony Green",
    "Ruth Adams",
    "Mark Baker",
    "Michelle Gonzalez",
];

pub(super) const COMPANIES: &[&str] = &[
    "TechCorp Inc",
    "Global Solutions",
    "Digital Innovations",
    "Cloud Systems",
    "Data Dynamics",
    "Future Works",
    "Smart Solutions",
    "Enterprise Plus",
    "NextGen Tech",
    "Alpha Industries",
    "Beta Systems",
    "Gamma Labs",
    "Delta Corp",
    "Epsilon Solutions",
    "Zeta Technologies",
    "Eta Ventures",
];

pub(super) const CONTACT_NAMES: &[&str] = &[
    "John Smith",
    "Sarah Johnson",
    "Michael Chen",
    "Emily Davis",
    "David Wilson",
    "Lisa Anderson",
    "Robert Taylor",
    "Jennifer Brown",
    "William Martinez",
    "Jessica Lee",
    "James White",
    "Amanda Harris",
    "Christopher Thompson",
    "Michelle Garcia",
    "Daniel Miller",
    "Ashley Moore",
];
