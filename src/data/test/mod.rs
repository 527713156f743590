mod inactivity;
