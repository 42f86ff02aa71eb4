mod ddragon;
mod league;
mod mastery;
mod summoner;
