//! Static data for the classic edition: 40 board spaces and two 16-card decks.
//!
//! Strings match the stored representation of the backend's active enums.

#[derive(Debug, Clone, Copy)]
pub struct SpaceSeed {
    pub index: i16,
    pub name: &'static str,
    pub space_type: &'static str,
    pub color_group: Option<&'static str>,
    pub price: Option<i32>,
    pub house_cost: Option<i32>,
    pub tax_amount: Option<i32>,
    /// Empty for spaces without rent.
    pub rent: &'static [i32],
}

impl SpaceSeed {
    pub fn mortgage_value(&self) -> Option<i32> {
        self.price.map(|p| p / 2)
    }

    pub fn is_ownable(&self) -> bool {
        self.price.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CardSeed {
    pub deck: &'static str,
    pub sequence: i16,
    pub text: &'static str,
    pub action: &'static str,
    /// JSON object text.
    pub parameters: &'static str,
}

const fn corner(index: i16, name: &'static str, space_type: &'static str) -> SpaceSeed {
    SpaceSeed {
        index,
        name,
        space_type,
        color_group: None,
        price: None,
        house_cost: None,
        tax_amount: None,
        rent: &[],
    }
}

const fn street(
    index: i16,
    name: &'static str,
    color: &'static str,
    price: i32,
    house_cost: i32,
    rent: &'static [i32],
) -> SpaceSeed {
    SpaceSeed {
        index,
        name,
        space_type: "PROPERTY",
        color_group: Some(color),
        price: Some(price),
        house_cost: Some(house_cost),
        tax_amount: None,
        rent,
    }
}

const fn railroad(index: i16, name: &'static str) -> SpaceSeed {
    SpaceSeed {
        index,
        name,
        space_type: "RAILROAD",
        color_group: None,
        price: Some(200),
        house_cost: None,
        tax_amount: None,
        rent: &[25, 50, 100, 200],
    }
}

const fn utility(index: i16, name: &'static str) -> SpaceSeed {
    SpaceSeed {
        index,
        name,
        space_type: "UTILITY",
        color_group: None,
        price: Some(150),
        house_cost: None,
        tax_amount: None,
        // dice multipliers for one / both utilities owned
        rent: &[4, 10],
    }
}

const fn tax(index: i16, name: &'static str, amount: i32) -> SpaceSeed {
    SpaceSeed {
        index,
        name,
        space_type: "TAX",
        color_group: None,
        price: None,
        house_cost: None,
        tax_amount: Some(amount),
        rent: &[],
    }
}

pub const BOARD: [SpaceSeed; 40] = [
    corner(0, "Go", "GO"),
    street(1, "Mediterranean Avenue", "BROWN", 60, 50, &[2, 10, 30, 90, 160, 250]),
    corner(2, "Community Chest", "COMMUNITY_CHEST"),
    street(3, "Baltic Avenue", "BROWN", 60, 50, &[4, 20, 60, 180, 320, 450]),
    tax(4, "Income Tax", 200),
    railroad(5, "Reading Railroad"),
    street(6, "Oriental Avenue", "LIGHT_BLUE", 100, 50, &[6, 30, 90, 270, 400, 550]),
    corner(7, "Chance", "CHANCE"),
    street(8, "Vermont Avenue", "LIGHT_BLUE", 100, 50, &[6, 30, 90, 270, 400, 550]),
    street(9, "Connecticut Avenue", "LIGHT_BLUE", 120, 50, &[8, 40, 100, 300, 450, 600]),
    corner(10, "Jail", "JAIL"),
    street(11, "St. Charles Place", "PINK", 140, 100, &[10, 50, 150, 450, 625, 750]),
    utility(12, "Electric Company"),
    street(13, "States Avenue", "PINK", 140, 100, &[10, 50, 150, 450, 625, 750]),
    street(14, "Virginia Avenue", "PINK", 160, 100, &[12, 60, 180, 500, 700, 900]),
    railroad(15, "Pennsylvania Railroad"),
    street(16, "St. James Place", "ORANGE", 180, 100, &[14, 70, 200, 550, 750, 950]),
    corner(17, "Community Chest", "COMMUNITY_CHEST"),
    street(18, "Tennessee Avenue", "ORANGE", 180, 100, &[14, 70, 200, 550, 750, 950]),
    street(19, "New York Avenue", "ORANGE", 200, 100, &[16, 80, 220, 600, 800, 1000]),
    corner(20, "Free Parking", "FREE_PARKING"),
    street(21, "Kentucky Avenue", "RED", 220, 150, &[18, 90, 250, 700, 875, 1050]),
    corner(22, "Chance", "CHANCE"),
    street(23, "Indiana Avenue", "RED", 220, 150, &[18, 90, 250, 700, 875, 1050]),
    street(24, "Illinois Avenue", "RED", 240, 150, &[20, 100, 300, 750, 925, 1100]),
    railroad(25, "B. & O. Railroad"),
    street(26, "Atlantic Avenue", "YELLOW", 260, 150, &[22, 110, 330, 800, 975, 1150]),
    street(27, "Ventnor Avenue", "YELLOW", 260, 150, &[22, 110, 330, 800, 975, 1150]),
    utility(28, "Water Works"),
    street(29, "Marvin Gardens", "YELLOW", 280, 150, &[24, 120, 360, 850, 1025, 1200]),
    corner(30, "Go To Jail", "GO_TO_JAIL"),
    street(31, "Pacific Avenue", "GREEN", 300, 200, &[26, 130, 390, 900, 1100, 1275]),
    street(32, "North Carolina Avenue", "GREEN", 300, 200, &[26, 130, 390, 900, 1100, 1275]),
    corner(33, "Community Chest", "COMMUNITY_CHEST"),
    street(34, "Pennsylvania Avenue", "GREEN", 320, 200, &[28, 150, 450, 1000, 1200, 1400]),
    railroad(35, "Short Line"),
    corner(36, "Chance", "CHANCE"),
    street(37, "Park Place", "DARK_BLUE", 350, 200, &[35, 175, 500, 1100, 1300, 1500]),
    tax(38, "Luxury Tax", 100),
    street(39, "Boardwalk", "DARK_BLUE", 400, 200, &[50, 200, 600, 1400, 1700, 2000]),
];

const fn card(
    deck: &'static str,
    sequence: i16,
    text: &'static str,
    action: &'static str,
    parameters: &'static str,
) -> CardSeed {
    CardSeed {
        deck,
        sequence,
        text,
        action,
        parameters,
    }
}

pub const CHANCE: [CardSeed; 16] = [
    card("CHANCE", 0, "Advance to Boardwalk.", "ADVANCE_TO", r#"{"space_index":39}"#),
    card("CHANCE", 1, "Advance to Go. Collect $200.", "ADVANCE_TO", r#"{"space_index":0}"#),
    card("CHANCE", 2, "Advance to Illinois Avenue. If you pass Go, collect $200.", "ADVANCE_TO", r#"{"space_index":24}"#),
    card("CHANCE", 3, "Advance to St. Charles Place. If you pass Go, collect $200.", "ADVANCE_TO", r#"{"space_index":11}"#),
    card("CHANCE", 4, "Advance to the nearest Railroad. If owned, pay the owner twice the rental.", "ADVANCE_TO_NEAREST", r#"{"space_type":"RAILROAD","rent_multiplier":2}"#),
    card("CHANCE", 5, "Advance to the nearest Railroad. If owned, pay the owner twice the rental.", "ADVANCE_TO_NEAREST", r#"{"space_type":"RAILROAD","rent_multiplier":2}"#),
    card("CHANCE", 6, "Advance to the nearest Utility. If owned, throw dice and pay the owner ten times the amount thrown.", "ADVANCE_TO_NEAREST", r#"{"space_type":"UTILITY","dice_multiplier":10}"#),
    card("CHANCE", 7, "Bank pays you a dividend of $50.", "COLLECT", r#"{"amount":50}"#),
    card("CHANCE", 8, "Get Out of Jail Free.", "GET_OUT_OF_JAIL", r#"{}"#),
    card("CHANCE", 9, "Go back three spaces.", "MOVE_BY", r#"{"steps":-3}"#),
    card("CHANCE", 10, "Go to Jail. Do not pass Go, do not collect $200.", "GO_TO_JAIL", r#"{}"#),
    card("CHANCE", 11, "Make general repairs on all your property: $25 per house, $100 per hotel.", "REPAIRS", r#"{"per_house":25,"per_hotel":100}"#),
    card("CHANCE", 12, "Speeding fine $15.", "PAY", r#"{"amount":15}"#),
    card("CHANCE", 13, "Take a trip to Reading Railroad. If you pass Go, collect $200.", "ADVANCE_TO", r#"{"space_index":5}"#),
    card("CHANCE", 14, "You have been elected Chairman of the Board. Pay each player $50.", "PAY_EACH_PLAYER", r#"{"amount":50}"#),
    card("CHANCE", 15, "Your building loan matures. Collect $150.", "COLLECT", r#"{"amount":150}"#),
];

pub const COMMUNITY_CHEST: [CardSeed; 16] = [
    card("COMMUNITY_CHEST", 0, "Advance to Go. Collect $200.", "ADVANCE_TO", r#"{"space_index":0}"#),
    card("COMMUNITY_CHEST", 1, "Bank error in your favor. Collect $200.", "COLLECT", r#"{"amount":200}"#),
    card("COMMUNITY_CHEST", 2, "Doctor's fee. Pay $50.", "PAY", r#"{"amount":50}"#),
    card("COMMUNITY_CHEST", 3, "From sale of stock you get $50.", "COLLECT", r#"{"amount":50}"#),
    card("COMMUNITY_CHEST", 4, "Get Out of Jail Free.", "GET_OUT_OF_JAIL", r#"{}"#),
    card("COMMUNITY_CHEST", 5, "Go to Jail. Do not pass Go, do not collect $200.", "GO_TO_JAIL", r#"{}"#),
    card("COMMUNITY_CHEST", 6, "Holiday fund matures. Receive $100.", "COLLECT", r#"{"amount":100}"#),
    card("COMMUNITY_CHEST", 7, "Income tax refund. Collect $20.", "COLLECT", r#"{"amount":20}"#),
    card("COMMUNITY_CHEST", 8, "It is your birthday. Collect $10 from every player.", "COLLECT_FROM_EACH_PLAYER", r#"{"amount":10}"#),
    card("COMMUNITY_CHEST", 9, "Life insurance matures. Collect $100.", "COLLECT", r#"{"amount":100}"#),
    card("COMMUNITY_CHEST", 10, "Pay hospital fees of $100.", "PAY", r#"{"amount":100}"#),
    card("COMMUNITY_CHEST", 11, "Pay school fees of $50.", "PAY", r#"{"amount":50}"#),
    card("COMMUNITY_CHEST", 12, "Receive $25 consultancy fee.", "COLLECT", r#"{"amount":25}"#),
    card("COMMUNITY_CHEST", 13, "You are assessed for street repairs: $40 per house, $115 per hotel.", "REPAIRS", r#"{"per_house":40,"per_hotel":115}"#),
    card("COMMUNITY_CHEST", 14, "You have won second prize in a beauty contest. Collect $10.", "COLLECT", r#"{"amount":10}"#),
    card("COMMUNITY_CHEST", 15, "You inherit $100.", "COLLECT", r#"{"amount":100}"#),
];
