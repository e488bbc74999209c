//! Static placeholder data used to bootstrap a fresh dashboard.

pub struct PlaceholderCustomer {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

pub struct PlaceholderInvoice {
    /// Fixed so that a repeated seed collides instead of duplicating rows
    pub id: &'static str,
    pub customer_id: &'static str,
    /// Cents
    pub amount: i64,
    pub status: &'static str,
    /// `YYYY-MM-DD`
    pub date: &'static str,
}

pub struct PlaceholderRevenue {
    pub month: &'static str,
    pub revenue: i64,
}

const DELBA: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
const LEE: &str = "3958dc9e-742f-4377-85e9-fec4b6a6442a";
const HECTOR: &str = "3958dc9e-737f-4377-85e9-fec4b6a6442a";
const STEVEN: &str = "50ca3e18-62cd-11ee-8c99-0242ac120002";
const STEPH: &str = "3958dc9e-787f-4377-85e9-fec4b6a6442a";
const MICHAEL: &str = "76d65c26-f784-44a2-ac19-586678f7c2f2";
const EVIL_RABBIT: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
const EMIL: &str = "126eed9c-c90c-4ef6-a4a8-fcf7408d3c66";
const AMY: &str = "cc27c14a-0acf-4f4a-a6c9-d45682c144b9";
const BALAZS: &str = "13d07535-c59e-4157-a011-f8d2ef4e0cbb";

pub const CUSTOMERS: &[PlaceholderCustomer] = &[
    PlaceholderCustomer {
        id: DELBA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    PlaceholderCustomer {
        id: LEE,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    PlaceholderCustomer {
        id: HECTOR,
        name: "Hector Simpson",
        email: "hector@simpson.com",
        image_url: "/customers/hector-simpson.png",
    },
    PlaceholderCustomer {
        id: STEVEN,
        name: "Steven Tey",
        email: "steven@tey.com",
        image_url: "/customers/steven-tey.png",
    },
    PlaceholderCustomer {
        id: STEPH,
        name: "Steph Dietz",
        email: "steph@dietz.com",
        image_url: "/customers/steph-dietz.png",
    },
    PlaceholderCustomer {
        id: MICHAEL,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    PlaceholderCustomer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    PlaceholderCustomer {
        id: EMIL,
        name: "Emil Kowalski",
        email: "emil@kowalski.com",
        image_url: "/customers/emil-kowalski.png",
    },
    PlaceholderCustomer {
        id: AMY,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    PlaceholderCustomer {
        id: BALAZS,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

pub const INVOICES: &[PlaceholderInvoice] = &[
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000001", customer_id: DELBA, amount: 15795, status: "pending", date: "2022-12-06" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000002", customer_id: LEE, amount: 20348, status: "pending", date: "2022-11-14" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000003", customer_id: STEPH, amount: 3040, status: "paid", date: "2022-10-29" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000004", customer_id: STEVEN, amount: 44800, status: "paid", date: "2023-09-10" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000005", customer_id: MICHAEL, amount: 34577, status: "pending", date: "2023-08-05" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000006", customer_id: EMIL, amount: 54246, status: "pending", date: "2023-07-16" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000007", customer_id: EVIL_RABBIT, amount: 666, status: "pending", date: "2023-06-27" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000008", customer_id: STEVEN, amount: 32545, status: "paid", date: "2023-06-09" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000009", customer_id: STEPH, amount: 1250, status: "paid", date: "2023-06-17" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-00000000000a", customer_id: MICHAEL, amount: 8546, status: "paid", date: "2023-06-07" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-00000000000b", customer_id: LEE, amount: 500, status: "paid", date: "2023-08-19" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-00000000000c", customer_id: MICHAEL, amount: 8945, status: "paid", date: "2023-06-03" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-00000000000d", customer_id: AMY, amount: 4200, status: "paid", date: "2023-06-18" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-00000000000e", customer_id: DELBA, amount: 4291, status: "pending", date: "2023-10-04" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-00000000000f", customer_id: HECTOR, amount: 1000, status: "paid", date: "2022-06-05" },
    PlaceholderInvoice { id: "b7f2c4e1-5a3d-4c8e-9f10-000000000010", customer_id: BALAZS, amount: 7385, status: "paid", date: "2023-05-21" },
];

pub const REVENUE: &[PlaceholderRevenue] = &[
    PlaceholderRevenue { month: "Jan", revenue: 2000 },
    PlaceholderRevenue { month: "Feb", revenue: 1800 },
    PlaceholderRevenue { month: "Mar", revenue: 2200 },
    PlaceholderRevenue { month: "Apr", revenue: 2500 },
    PlaceholderRevenue { month: "May", revenue: 2300 },
    PlaceholderRevenue { month: "Jun", revenue: 3200 },
    PlaceholderRevenue { month: "Jul", revenue: 3500 },
    PlaceholderRevenue { month: "Aug", revenue: 3700 },
    PlaceholderRevenue { month: "Sep", revenue: 2500 },
    PlaceholderRevenue { month: "Oct", revenue: 2800 },
    PlaceholderRevenue { month: "Nov", revenue: 3000 },
    PlaceholderRevenue { month: "Dec", revenue: 4800 },
];
