//! Built-in sampling vocabularies for the synthetic catalog.

use crate::models::Category;

pub const MOVIE_TITLES: &[&str] = &[
    "The Shawshank Redemption", "The Godfather", "Pulp Fiction", "Fight Club", "Inception",
    "The Dark Knight", "Forrest Gump", "Parasite", "Interstellar", "Schindler's List",
    "The Matrix", "Goodfellas", "Se7en", "Gladiator", "Titanic", "Avatar", "Braveheart",
    "Saving Private Ryan", "Avengers: Endgame", "La La Land", "Joker", "Black Panther",
    "WALL-E", "Up", "Toy Story", "Spirited Away", "Amélie", "City of God", "Whiplash",
    "The Prestige", "Memento", "Django Unchained", "The Lion King", "The Silence of the Lambs",
    "Jurassic Park", "Terminator 2: Judgment Day", "The Green Mile", "Back to the Future",
    "Casablanca", "Star Wars", "The Pianist", "12 Angry Men", "Once Upon a Time in the West",
    "Alien", "Psycho", "The Departed", "The Usual Suspects",
    "Indiana Jones and the Last Crusade", "Die Hard", "Raiders of the Lost Ark",
    "The Great Dictator", "Cinema Paradiso", "Slumdog Millionaire", "Inglourious Basterds",
    "1917", "Shutter Island", "The Wolf of Wall Street", "Gone Girl",
];

pub const WEBSERIES_TITLES: &[&str] = &[
    "Breaking Bad", "Game of Thrones", "Stranger Things", "The Crown", "Friends", "Sherlock",
    "Money Heist", "Dark", "The Mandalorian", "The Witcher", "House of Cards", "Westworld",
    "Narcos", "The Handmaid's Tale", "Peaky Blinders", "Better Call Saul", "The Boys",
    "Chernobyl", "Ozark", "The Office", "Brooklyn Nine-Nine", "Modern Family", "Vikings",
    "Black Mirror", "Succession", "Lucifer", "Fargo", "Dexter", "The Big Bang Theory",
    "Homeland", "Prison Break", "True Detective", "Lost", "Mr. Robot", "Hannibal", "Cobra Kai",
    "Invincible", "Band of Brothers", "Ted Lasso", "Arcane",
];

pub const GENRES: &[&str] = &[
    "Drama", "Crime", "Thriller", "Action", "Romance", "Comedy", "Sci-Fi", "Fantasy", "Mystery",
    "Horror", "Adventure", "Animation", "Biography", "Family", "Musical", "War", "Superhero",
];

pub const KEYWORDS: &[&str] = &[
    "revenge", "love", "betrayal", "hero", "villain", "friendship", "war", "magic",
    "time-travel", "epic", "survival", "espionage", "heist", "dystopian", "robots", "zombies",
    "murder", "coming-of-age", "conspiracy", "courtroom", "gangster", "space", "multiverse",
    "pirates", "historical", "martial-arts", "alien", "apocalypse", "cyberpunk", "disaster",
];

pub const TAGLINES: &[&str] = &[
    "An unexpected journey.", "A battle of wills.", "Destiny awaits.",
    "Nothing is what it seems.", "Love conquers all.", "The world will tremble.",
    "A mind-bending adventure.", "Truth lies within.", "Beyond the horizon.",
    "Two worlds collide.", "A race against time.", "Unleash your imagination.",
    "The legend begins.", "Where heroes are born.", "One secret can change everything.",
];

pub const CAST: &[&str] = &[
    "Leonardo DiCaprio", "Morgan Freeman", "Brad Pitt", "Tom Hanks", "Scarlett Johansson",
    "Natalie Portman", "Johnny Depp", "Kate Winslet", "Al Pacino", "Keanu Reeves",
    "Marlon Brando", "Christian Bale", "Heath Ledger", "Benedict Cumberbatch", "Emilia Clarke",
    "Aaron Paul", "Bryan Cranston", "Pedro Pascal", "Henry Cavill", "Jennifer Aniston",
    "Courteney Cox", "Matthew Perry", "Matt Damon", "Julia Roberts", "Angelina Jolie",
    "Samuel L. Jackson", "Robert Downey Jr.", "Chris Evans", "Chris Hemsworth", "Gal Gadot",
    "Ryan Reynolds", "Denzel Washington", "Will Smith", "Anne Hathaway", "Jessica Chastain",
    "Harrison Ford", "Keira Knightley", "Ian McKellen", "Patrick Stewart", "Emma Stone",
    "Amy Adams", "Bruce Willis", "Zoe Saldana", "Tom Holland", "Zac Efron", "Joaquin Phoenix",
];

pub const DIRECTORS: &[&str] = &[
    "Christopher Nolan", "Steven Spielberg", "Quentin Tarantino", "Martin Scorsese",
    "David Fincher", "James Cameron", "Francis Ford Coppola", "Tim Burton", "Ridley Scott",
    "Denis Villeneuve", "Alfred Hitchcock", "Bong Joon Ho", "Coen Brothers", "Peter Jackson",
    "Guy Ritchie", "Michael Bay", "Clint Eastwood", "Alejandro G. Inarritu", "Kathryn Bigelow",
    "Taika Waititi", "Wes Anderson", "Robert Zemeckis", "Stanley Kubrick", "Ron Howard",
    "George Lucas", "J.J. Abrams", "Gore Verbinski", "Sam Mendes", "Anthony & Joe Russo",
];

pub const COUNTRIES: &[&str] = &[
    "USA", "India", "China", "Japan", "France", "UK", "Germany", "Italy", "Spain", "Korea",
    "Russia", "Brazil", "Australia", "Canada", "Mexico", "New Zealand", "Sweden", "Denmark",
    "South Africa", "Argentina",
];
/// Word lists the synthesizer samples from. Every list must be non-empty, and
/// `genres`/`keywords` need at least 2 and 3 entries, `cast` at least 3.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub movie_titles: Vec<String>,
    pub webseries_titles: Vec<String>,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub taglines: Vec<String>,
    pub cast: Vec<String>,
    pub directors: Vec<String>,
    pub countries: Vec<String>,
}

impl Vocabulary {
    pub fn titles(&self, category: Category) -> &[String] {
        match category {
            Category::Movie => &self.movie_titles,
            Category::Webseries => &self.webseries_titles,
        }
    }

    /// Name of the first list too short to sample from, if any.
    pub fn first_undersized(&self) -> Option<&'static str> {
        let checks: [(&'static str, usize, usize); 8] = [
            ("movie_titles", self.movie_titles.len(), 1),
            ("webseries_titles", self.webseries_titles.len(), 1),
            ("genres", self.genres.len(), 2),
            ("keywords", self.keywords.len(), 3),
            ("taglines", self.taglines.len(), 1),
            ("cast", self.cast.len(), 3),
            ("directors", self.directors.len(), 1),
            ("countries", self.countries.len(), 1),
        ];
        checks.into_iter().find(|(_, len, min)| len < min).map(|(name, _, _)| name)
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            movie_titles: owned(MOVIE_TITLES),
            webseries_titles: owned(WEBSERIES_TITLES),
            genres: owned(GENRES),
            keywords: owned(KEYWORDS),
            taglines: owned(TAGLINES),
            cast: owned(CAST),
            directors: owned(DIRECTORS),
            countries: owned(COUNTRIES),
        }
    }
}
